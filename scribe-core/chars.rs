use crate::line_ending::LineEnding;

/// Character classes used when scanning identifiers for word boundaries.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCategory {
  Upper,
  Lower,
  Separator,
  Other,
}

pub fn categorize_char(ch: char) -> CharCategory {
  use unicode_general_category::{
    GeneralCategory,
    get_general_category,
  };

  match ch {
    c if char_is_separator(c) => CharCategory::Separator,
    // Titlecase digraphs such as `ǅ` start a word like capitals do.
    c if c.is_uppercase() || get_general_category(c) == GeneralCategory::TitlecaseLetter => {
      CharCategory::Upper
    },
    c if c.is_lowercase() => CharCategory::Lower,
    _ => CharCategory::Other,
  }
}

/// `_` and `-`, the two word separators understood by the case converters.
#[inline]
pub fn char_is_separator(ch: char) -> bool {
  matches!(ch, '_' | '-')
}

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  LineEnding::from_char(ch).is_some()
}

#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  // Space separators (Zs) and tab. Line endings are `char_is_line_ending`.
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{0020}' | // Space
      '\u{00A0}' | // No-break Space
      '\u{1680}' | // Ogham Space Mark
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}'   // Ideographic Space
      => true,

      // En Quad, Em Quad, En Space, Em Space, Three-per-em Space,
      // Four-per-em Space, Six-per-em Space, Figure Space,
      // Punctuation Space, Thin Space, Hair Space.
      ch if ('\u{2000}' ..= '\u{200A}').contains(&ch) => true,

      _ => false,
    }
}
