use smartstring::{LazyCompact, SmartString};

pub mod assemble;
pub mod case_convention;
pub mod config;
pub mod doc_comment;
pub mod inflection;
pub mod line;
pub mod symbol;
pub mod wrap;

pub use assemble::{BlockBuilder, Fragment, assemble};
pub use doc_comment::DocComment;
pub use line::{Line, LineBlock, LineError, ToLines};

pub type Tendril = SmartString<LazyCompact>;
