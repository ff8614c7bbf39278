//! Greedy word wrapping.

use scribe_core::{
  chars::char_is_whitespace,
  grapheme::grapheme_count,
};

/// Wraps `text` into lines of at most `width` grapheme clusters.
///
/// The text is split at every whitespace character, so runs of whitespace
/// leave empty words behind and an empty text is a single empty line. Words
/// are packed greedily: a word joins the current line, separated by one
/// space, as long as the line stays within `width`. A word longer than
/// `width` is never split and sits on a line of its own.
///
/// ```
/// use scribe_lib::wrap::word_wrap;
///
/// assert_eq!(
///   word_wrap("Hello World, how are you doing?", 12),
///   ["Hello World,", "how are you", "doing?"]
/// );
/// ```
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
  let mut lines: Vec<(String, usize)> = Vec::new();

  for word in text.split(char_is_whitespace) {
    let word_len = grapheme_count(word);
    match lines.last_mut() {
      Some((line, line_len)) if *line_len + word_len + 1 <= width => {
        line.push(' ');
        line.push_str(word);
        *line_len += word_len + 1;
      },
      _ => lines.push((word.to_owned(), word_len)),
    }
  }

  lines.into_iter().map(|(line, _)| line).collect()
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn wrapping_at_length() {
    assert_eq!(word_wrap("Hello World, how are you doing?", 12), [
      "Hello World,",
      "how are you",
      "doing?"
    ]);
  }

  #[test]
  fn fits_on_one_line() {
    assert_eq!(word_wrap("short text", 80), ["short text"]);
    assert_eq!(word_wrap("exactly twelve", 14), ["exactly twelve"]);
  }

  #[test]
  fn long_words_are_not_split() {
    assert_eq!(word_wrap("a supercalifragilistic b", 5), [
      "a",
      "supercalifragilistic",
      "b"
    ]);
    assert_eq!(word_wrap("word", 0), ["word"]);
  }

  #[test]
  fn empty_text_is_one_empty_line() {
    assert_eq!(word_wrap("", 80), [""]);
  }

  #[test]
  fn whitespace_runs_keep_empty_words() {
    assert_eq!(word_wrap("a  b", 80), ["a  b"]);
    assert_eq!(word_wrap("a\tb", 80), ["a b"]);
    assert_eq!(word_wrap("a  b", 2), ["a ", "b"]);
  }

  #[test]
  fn invisible_format_characters_stay_inside_words() {
    assert_eq!(word_wrap("foo\u{200B}bar", 80), ["foo\u{200B}bar"]);
    assert_eq!(word_wrap("\u{FEFF}header", 80), ["\u{FEFF}header"]);
    assert_eq!(word_wrap("a\u{180E}b", 80), ["a\u{180E}b"]);
    assert_eq!(word_wrap("a\u{2003}b", 80), ["a b"]);
  }

  #[test]
  fn counts_graphemes_not_bytes() {
    assert_eq!(word_wrap("café crème brûlée", 10), ["café crème", "brûlée"]);
  }
}
