//! Lines and blocks of generated text.
//!
//! A [`Line`] is one physical line: its text never contains a line ending.
//! A [`LineBlock`] is an ordered run of lines, the unit generators compose.
//! Transforms such as [`LineBlock::wrapped`] and [`LineBlock::commented`]
//! return new blocks; the in-place variants ([`LineBlock::wrap`],
//! [`LineBlock::comment`]) rewrite the block they are called on.
//!
//! # Example
//!
//! ```
//! use scribe_lib::{Line, LineBlock};
//!
//! let mut block = LineBlock::from("struct Point {\n  x: i32,");
//! block.push(Line::new("}").unwrap());
//! assert_eq!(block.render(), "struct Point {\n  x: i32,\n}");
//! assert!(Line::new("two\nlines").is_err());
//! ```

use std::{
  fmt,
  str::FromStr,
};

use scribe_core::line_ending::{
  LineEnding,
  split_lines,
  str_contains_line_ending,
};
use thiserror::Error;

use crate::wrap::word_wrap;

/// Width used by [`LineBlock::wrapped`] callers that have no preference.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Prefix used for doc comments.
pub const DEFAULT_COMMENT_PREFIX: &str = "/// ";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LineError {
  #[error("a single line cannot contain a line ending: {text:?}")]
  MalformedLine { text: String },
}

type Result<T> = std::result::Result<T, LineError>;

/// Exactly one physical line of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Line {
  text: String,
}

impl Line {
  /// Fails with [`LineError::MalformedLine`] if `text` contains a line ending.
  /// Use [`LineBlock::from`] for text that may span several lines.
  pub fn new(text: impl Into<String>) -> Result<Self> {
    let text = text.into();
    if str_contains_line_ending(&text) {
      return Err(LineError::MalformedLine { text });
    }
    Ok(Self { text })
  }

  /// Callers guarantee `text` holds no line ending.
  pub(crate) fn new_unchecked(text: String) -> Self {
    debug_assert!(!str_contains_line_ending(&text));
    Self { text }
  }

  pub fn empty() -> Self {
    Self::default()
  }

  #[inline]
  pub fn as_str(&self) -> &str {
    &self.text
  }

  pub fn into_string(self) -> String {
    self.text
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// `prefix` followed by the text, with surrounding whitespace trimmed from
  /// the result. An empty line commented with `"/// "` is `"///"`.
  pub fn commented(&self, prefix: &str) -> Line {
    let commented = format!("{prefix}{}", self.text);
    // Line endings inside the prefix would split the line; they become spaces.
    Line::new_unchecked(
      split_lines(commented.trim())
        .collect::<Vec<_>>()
        .join(" "),
    )
  }

  /// Greedy word wrap of this line into lines at most `width` long, unless a
  /// single word is longer.
  pub fn wrapped(&self, width: usize) -> LineBlock {
    word_wrap(&self.text, width)
      .into_iter()
      .map(Line::new_unchecked)
      .collect()
  }
}

impl fmt::Display for Line {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

impl AsRef<str> for Line {
  fn as_ref(&self) -> &str {
    &self.text
  }
}

impl FromStr for Line {
  type Err = LineError;

  fn from_str(s: &str) -> Result<Self> {
    Line::new(s)
  }
}

impl TryFrom<&str> for Line {
  type Error = LineError;

  fn try_from(text: &str) -> Result<Self> {
    Line::new(text)
  }
}

impl TryFrom<String> for Line {
  type Error = LineError;

  fn try_from(text: String) -> Result<Self> {
    Line::new(text)
  }
}

impl From<Line> for String {
  fn from(line: Line) -> Self {
    line.text
  }
}

/// An ordered sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LineBlock {
  lines: Vec<Line>,
}

impl LineBlock {
  pub fn new() -> Self {
    Self::default()
  }

  /// A block holding one empty line.
  pub fn empty_line() -> Self {
    Self {
      lines: vec![Line::empty()],
    }
  }

  /// `None` is the empty block, `Some` is split into lines.
  pub fn from_optional(text: Option<&str>) -> Self {
    text.map(Self::from).unwrap_or_default()
  }

  /// Flattens `blocks` into one block, in order.
  pub fn concat<I>(blocks: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<LineBlock>,
  {
    let mut res = Self::new();
    for block in blocks {
      res.append(block.into());
    }
    res
  }

  #[inline]
  pub fn lines(&self) -> &[Line] {
    &self.lines
  }

  pub fn into_lines(self) -> Vec<Line> {
    self.lines
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.lines.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Line> {
    self.lines.iter()
  }

  /// `(index, text)` pairs for consumers that display line by line.
  pub fn indexed_lines(&self) -> impl Iterator<Item = (usize, &str)> {
    self.lines.iter().map(Line::as_str).enumerate()
  }

  pub fn push(&mut self, line: Line) {
    self.lines.push(line);
  }

  pub fn append(&mut self, block: LineBlock) {
    self.lines.extend(block.lines);
  }

  #[must_use]
  pub fn appending_line(mut self, line: Line) -> Self {
    self.push(line);
    self
  }

  #[must_use]
  pub fn appending(mut self, block: LineBlock) -> Self {
    self.append(block);
    self
  }

  /// Word wraps every line on its own and joins the results in order.
  #[must_use]
  pub fn wrapped(&self, width: usize) -> Self {
    let wrapped: Self = self.lines.iter().map(|line| line.wrapped(width)).collect();
    tracing::trace!(
      width,
      before = self.len(),
      after = wrapped.len(),
      "wrapped line block"
    );
    wrapped
  }

  pub fn wrap(&mut self, width: usize) {
    *self = self.wrapped(width);
  }

  /// Prefixes every line with `prefix`. The line count never changes.
  #[must_use]
  pub fn commented(&self, prefix: &str) -> Self {
    self.lines.iter().map(|line| line.commented(prefix)).collect()
  }

  pub fn comment(&mut self, prefix: &str) {
    for line in &mut self.lines {
      *line = line.commented(prefix);
    }
  }

  /// The lines joined with `\n`, without a trailing line ending.
  pub fn render(&self) -> String {
    self.render_with(LineEnding::LF)
  }

  pub fn render_with(&self, ending: LineEnding) -> String {
    let mut out = String::with_capacity(
      self.lines.iter().map(|line| line.text.len() + 2).sum(),
    );
    for (idx, line) in self.lines.iter().enumerate() {
      if idx > 0 {
        out.push_str(ending.as_str());
      }
      out.push_str(&line.text);
    }
    out
  }

  /// Builds a block with a [`BlockBuilder`](crate::assemble::BlockBuilder).
  pub fn build<F>(build: F) -> Self
  where
    F: FnOnce(crate::assemble::BlockBuilder) -> crate::assemble::BlockBuilder,
  {
    build(crate::assemble::BlockBuilder::new()).build()
  }
}

impl fmt::Display for LineBlock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.render())
  }
}

impl From<&str> for LineBlock {
  /// Splits on line endings; CRLF counts as one. Never fails.
  fn from(text: &str) -> Self {
    split_lines(text)
      .map(|line| Line::new_unchecked(line.to_owned()))
      .collect()
  }
}

impl From<String> for LineBlock {
  fn from(text: String) -> Self {
    Self::from(text.as_str())
  }
}

impl From<&String> for LineBlock {
  fn from(text: &String) -> Self {
    Self::from(text.as_str())
  }
}

impl From<Line> for LineBlock {
  fn from(line: Line) -> Self {
    Self { lines: vec![line] }
  }
}

impl From<Vec<Line>> for LineBlock {
  fn from(lines: Vec<Line>) -> Self {
    Self { lines }
  }
}

impl FromIterator<Line> for LineBlock {
  fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
    Self {
      lines: iter.into_iter().collect(),
    }
  }
}

impl FromIterator<LineBlock> for LineBlock {
  fn from_iter<I: IntoIterator<Item = LineBlock>>(iter: I) -> Self {
    Self {
      lines: iter.into_iter().flat_map(|block| block.lines).collect(),
    }
  }
}

impl Extend<Line> for LineBlock {
  fn extend<I: IntoIterator<Item = Line>>(&mut self, iter: I) {
    self.lines.extend(iter);
  }
}

impl Extend<LineBlock> for LineBlock {
  fn extend<I: IntoIterator<Item = LineBlock>>(&mut self, iter: I) {
    for block in iter {
      self.append(block);
    }
  }
}

impl IntoIterator for LineBlock {
  type Item = Line;
  type IntoIter = std::vec::IntoIter<Line>;

  fn into_iter(self) -> Self::IntoIter {
    self.lines.into_iter()
  }
}

impl<'a> IntoIterator for &'a LineBlock {
  type Item = &'a Line;
  type IntoIter = std::slice::Iter<'a, Line>;

  fn into_iter(self) -> Self::IntoIter {
    self.lines.iter()
  }
}

/// Values that present themselves as lines of text.
///
/// Anything implementing this can be dropped into a
/// [`BlockBuilder`](crate::assemble::BlockBuilder).
pub trait ToLines {
  fn to_lines(&self) -> LineBlock;
}

impl ToLines for LineBlock {
  fn to_lines(&self) -> LineBlock {
    self.clone()
  }
}

impl ToLines for Line {
  fn to_lines(&self) -> LineBlock {
    LineBlock::from(self.clone())
  }
}

impl ToLines for str {
  fn to_lines(&self) -> LineBlock {
    LineBlock::from(self)
  }
}

impl ToLines for String {
  fn to_lines(&self) -> LineBlock {
    LineBlock::from(self.as_str())
  }
}

impl<T: ToLines + ?Sized> ToLines for &T {
  fn to_lines(&self) -> LineBlock {
    (**self).to_lines()
  }
}

#[cfg(test)]
mod test {
  use quickcheck::{Arbitrary, Gen};

  use super::*;

  fn lines(block: &LineBlock) -> Vec<&str> {
    block.iter().map(Line::as_str).collect()
  }

  #[test]
  fn line_rejects_line_endings() {
    assert_eq!(Line::new("hello").unwrap().as_str(), "hello");
    assert_eq!(Line::new("").unwrap(), Line::empty());
    for text in ["a\nb", "a\r\nb", "trailing\n", "\r", "a\u{2028}b"] {
      assert_eq!(
        Line::new(text),
        Err(LineError::MalformedLine {
          text: text.to_string()
        })
      );
    }
    assert!("one line".parse::<Line>().is_ok());
    assert!(Line::try_from(String::from("two\nlines")).is_err());
  }

  #[test]
  fn block_from_text() {
    assert_eq!(lines(&LineBlock::from("Hello\nWorld")), ["Hello", "World"]);
    assert_eq!(lines(&LineBlock::from("a\r\nb")), ["a", "b"]);
    assert_eq!(lines(&LineBlock::from("")), [""]);
    assert_eq!(lines(&LineBlock::from("func a() {}\n")), ["func a() {}", ""]);
    assert!(LineBlock::from_optional(None).is_empty());
    assert_eq!(lines(&LineBlock::from_optional(Some("x"))), ["x"]);
  }

  #[test]
  fn concat_and_append() {
    let a = LineBlock::from("a\nb");
    let b = LineBlock::from("c");
    let joined = LineBlock::concat([a.clone(), b.clone()]);
    assert_eq!(lines(&joined), ["a", "b", "c"]);
    assert_eq!(LineBlock::concat(Vec::<LineBlock>::new()), LineBlock::new());
    assert_eq!(LineBlock::concat([LineBlock::new(), a.clone()]), a);

    let mut grown = a.clone();
    grown.append(b.clone());
    grown.push(Line::new("d").unwrap());
    assert_eq!(lines(&grown), ["a", "b", "c", "d"]);

    let built = a.appending(b).appending_line(Line::new("d").unwrap());
    assert_eq!(built, grown);
  }

  #[test]
  fn render_joins_without_trailing_terminator() {
    assert_eq!(LineBlock::new().render(), "");
    assert_eq!(LineBlock::empty_line().render(), "");
    assert_eq!(LineBlock::from("a\nb").render(), "a\nb");
    assert_eq!(LineBlock::from("a\nb").render_with(LineEnding::Crlf), "a\r\nb");
    assert_eq!(LineBlock::from("a\nb").to_string(), "a\nb");
    assert_eq!(
      LineBlock::from("x\ny").indexed_lines().collect::<Vec<_>>(),
      [(0, "x"), (1, "y")]
    );
  }

  #[test]
  fn comment_lines() {
    let block = LineBlock::from("Hello\n\nWorld");
    assert_eq!(lines(&block.commented(DEFAULT_COMMENT_PREFIX)), [
      "/// Hello",
      "///",
      "/// World"
    ]);
    assert_eq!(lines(&block.commented("// ")), ["// Hello", "//", "// World"]);

    let mut in_place = block.clone();
    in_place.comment("# ");
    assert_eq!(lines(&in_place), ["# Hello", "#", "# World"]);

    // The whole result is trimmed, not only the prefix.
    let padded = LineBlock::from("  indented  ");
    assert_eq!(lines(&padded.commented("")), ["indented"]);
  }

  #[test]
  fn comment_prefix_with_line_ending_stays_single_line() {
    let line = Line::new("text").unwrap();
    assert_eq!(line.commented("//\n").as_str(), "// text");
  }

  #[test]
  fn wrap_lines() {
    let block = LineBlock::from("Hello World, how are you doing?");
    assert_eq!(lines(&block.wrapped(12)), [
      "Hello World,",
      "how are you",
      "doing?"
    ]);

    let mut two = LineBlock::from("aaa bbb\n\nccc ddd");
    two.wrap(3);
    assert_eq!(lines(&two), ["aaa", "bbb", "", "ccc", "ddd"]);
  }

  #[derive(Debug, Clone)]
  struct Text(String);

  impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
      let words = ["alpha", "be", "c", "", "delta-epsilon", " ", "\n", "\t"];
      let len = usize::arbitrary(g) % 24;
      Text(
        (0..len)
          .map(|_| *g.choose(&words).unwrap_or(&""))
          .collect::<Vec<_>>()
          .join(" "),
      )
    }
  }

  quickcheck::quickcheck! {
    fn render_reproduces_lf_text(text: String) -> bool {
      let text = text.replace(['\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}'], "");
      LineBlock::from(text.as_str()).render() == text
    }

    fn comment_preserves_line_count(text: String, prefix: String) -> bool {
      let block = LineBlock::from(text);
      block.commented(&prefix).len() == block.len()
    }

    fn concat_is_sequence_append(a: String, b: String) -> bool {
      let (a, b) = (LineBlock::from(a), LineBlock::from(b));
      let expected: Vec<Line> = a.lines().iter().chain(b.lines()).cloned().collect();
      LineBlock::concat([a, b]).into_lines() == expected
    }

    fn wrapped_lines_fit_unless_single_word(text: Text, width: u8) -> bool {
      let width = usize::from(width % 40) + 1;
      LineBlock::from(text.0).wrapped(width).iter().all(|line| {
        scribe_core::grapheme::grapheme_count(line.as_str()) <= width
          || !line.as_str().contains(' ')
      })
    }

    fn rewrapping_is_stable(text: Text, width: u8) -> bool {
      let width = usize::from(width % 40) + 1;
      let once = LineBlock::from(text.0).wrapped(width);
      once.wrapped(width) == once
    }
  }
}
