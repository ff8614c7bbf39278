use crate::chars::char_is_line_ending;

#[cfg(target_os = "windows")]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Crlf;

#[cfg(not(target_os = "windows"))]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::LF;

#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  #[default]
  LF,

  /// U+000B -- VerticalTab
  VT,

  /// U+000C -- FormFeed
  FF,

  /// U+000D -- CarriageReturn
  CR,

  /// U+0085 -- NextLine
  Nel,

  /// U+2028 -- Line Separator
  LS,

  /// U+2029 -- ParagraphSeparator
  PS,
}

impl LineEnding {
  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
      Self::VT => "\u{000B}",
      Self::FF => "\u{000C}",
      Self::CR => "\u{000D}",
      Self::Nel => "\u{0085}",
      Self::LS => "\u{2028}",
      Self::PS => "\u{2029}",
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      '\u{000B}' => Some(LineEnding::VT),
      '\u{000C}' => Some(LineEnding::FF),
      '\u{000D}' => Some(LineEnding::CR),
      '\u{0085}' => Some(LineEnding::Nel),
      '\u{2028}' => Some(LineEnding::LS),
      '\u{2029}' => Some(LineEnding::PS),
      _ => None,
    }
  }
}

/// Returns true if any line ending character occurs anywhere in `s`.
#[inline]
pub fn str_contains_line_ending(s: &str) -> bool {
  s.chars().any(char_is_line_ending)
}

/// Splits `text` into physical lines, treating CRLF as a single terminator.
///
/// Text without any terminator is one line, so the empty string yields a
/// single empty line and a trailing terminator yields a trailing empty line.
/// Joining the pieces with the terminators they were split on reproduces the
/// input exactly.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
  LineSplit::new(text).map(|(line, _)| line)
}

/// Iterator over `(line, terminator)` pairs of a string. The last item
/// always has no terminator.
#[derive(Debug, Clone)]
pub struct LineSplit<'a> {
  rest: Option<&'a str>,
}

impl<'a> LineSplit<'a> {
  pub fn new(text: &'a str) -> Self {
    Self { rest: Some(text) }
  }
}

impl<'a> Iterator for LineSplit<'a> {
  type Item = (&'a str, Option<LineEnding>);

  fn next(&mut self) -> Option<Self::Item> {
    let text = self.rest?;
    let Some((pos, ending)) = text
      .char_indices()
      .find_map(|(pos, ch)| LineEnding::from_char(ch).map(|ending| (pos, ending)))
    else {
      self.rest = None;
      return Some((text, None));
    };

    let ending = if ending == LineEnding::CR && text[pos..].starts_with(LineEnding::Crlf.as_str()) {
      LineEnding::Crlf
    } else {
      ending
    };

    self.rest = Some(&text[pos + ending.as_str().len()..]);
    Some((&text[..pos], Some(ending)))
  }
}

#[cfg(test)]
mod line_ending_tests {
  use super::*;

  #[test]
  fn contains_line_ending() {
    assert!(str_contains_line_ending("a\nb"));
    assert!(str_contains_line_ending("a\rb"));
    assert!(str_contains_line_ending("\u{2029}"));
    assert!(!str_contains_line_ending("a b\tc"));
    assert!(!str_contains_line_ending(""));
  }

  #[test]
  fn split_lines_on_terminators() {
    let lines: Vec<_> = split_lines("a\nb\r\nc\rd").collect();
    assert_eq!(lines, ["a", "b", "c", "d"]);

    let lines: Vec<_> = split_lines("").collect();
    assert_eq!(lines, [""]);

    let lines: Vec<_> = split_lines("func a() {}\n").collect();
    assert_eq!(lines, ["func a() {}", ""]);

    let lines: Vec<_> = split_lines("\n\n").collect();
    assert_eq!(lines, ["", "", ""]);
  }

  #[test]
  fn split_reports_terminators() {
    let pieces: Vec<_> = LineSplit::new("a\r\nb\n").collect();
    assert_eq!(pieces, [
      ("a", Some(LineEnding::Crlf)),
      ("b", Some(LineEnding::LF)),
      ("", None),
    ]);
  }

  quickcheck::quickcheck! {
    fn split_then_join_reproduces_text(text: String) -> bool {
      let joined: String = LineSplit::new(&text)
        .map(|(line, ending)| format!("{line}{}", ending.map_or("", |e| e.as_str())))
        .collect();
      joined == text
    }
  }
}
