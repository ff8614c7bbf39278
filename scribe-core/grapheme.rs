//! Grapheme cluster helpers used to measure text the way a reader counts it.

use unicode_segmentation::UnicodeSegmentation;

/// Number of extended grapheme clusters in `text`.
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
  if text.is_ascii() {
    // Fast-path for pure ASCII: each byte is its own cluster. CRLF would be
    // one cluster, but line endings never reach this function.
    text.len()
  } else {
    text.graphemes(true).count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_grapheme_count() {
    assert_eq!(grapheme_count(""), 0);
    assert_eq!(grapheme_count("hello"), 5);
    assert_eq!(grapheme_count("café"), 4);
    // e + combining acute accent
    assert_eq!(grapheme_count("cafe\u{0301}"), 4);
    assert_eq!(grapheme_count("👍🏽 ok"), 4);
  }
}
