pub mod iter;
pub mod quote;
