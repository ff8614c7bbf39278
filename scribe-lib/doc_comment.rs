//! Doc comments: word-wrapped, then prefixed line by line.

use std::fmt;

use crate::{
  assemble::BlockBuilder,
  config::Config,
  line::{DEFAULT_COMMENT_PREFIX, DEFAULT_WRAP_WIDTH, LineBlock, ToLines},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
  lines: LineBlock,
}

impl DocComment {
  /// Wraps `comment` at 80 columns and prefixes every line with `/// `.
  pub fn new(comment: LineBlock) -> Self {
    Self::styled(comment, DEFAULT_WRAP_WIDTH, DEFAULT_COMMENT_PREFIX)
  }

  /// Like [`DocComment::new`] with the configured width and prefix.
  pub fn with_config(comment: LineBlock, config: &Config) -> Self {
    Self::styled(comment, config.wrap_width, &config.comment_prefix)
  }

  fn styled(comment: LineBlock, width: usize, prefix: &str) -> Self {
    Self {
      lines: comment.wrapped(width).commented(prefix),
    }
  }

  /// Surrounding whitespace and blank lines of `text` are dropped first.
  pub fn from_text(text: &str) -> Self {
    Self::new(LineBlock::from(text.trim()))
  }

  pub fn build<F>(build: F) -> Self
  where
    F: FnOnce(BlockBuilder) -> BlockBuilder,
  {
    Self::new(LineBlock::build(build))
  }

  /// A doc comment line without text, rendered as `///`.
  pub fn empty_line() -> Self {
    Self::new(LineBlock::empty_line())
  }

  pub fn lines(&self) -> &LineBlock {
    &self.lines
  }

  pub fn into_lines(self) -> LineBlock {
    self.lines
  }
}

impl ToLines for DocComment {
  fn to_lines(&self) -> LineBlock {
    self.lines.clone()
  }
}

impl fmt::Display for DocComment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.lines, f)
  }
}
