//! Quoting helpers for generated source text.

pub trait QuoteExt {
  /// Wraps the text in double quotes. No escaping is performed.
  fn quoted(&self) -> String;
  /// Wraps the text in backticks.
  fn tick_quoted(&self) -> String;
}

impl QuoteExt for str {
  fn quoted(&self) -> String {
    format!("\"{self}\"")
  }

  fn tick_quoted(&self) -> String {
    format!("`{self}`")
  }
}
