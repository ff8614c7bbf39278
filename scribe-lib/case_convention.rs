//! Identifier case conversion.
//!
//! Two scans do all the work here:
//!
//! - [`camel_case_word_ranges`] splits a camelCase identifier into words. A
//!   word ends before an uppercase letter; a run of two or more uppercase
//!   letters followed by a lowercase letter is a word of its own (an acronym)
//!   minus its last letter, which starts the next word. `myURLProperty` is
//!   `my`, `URL`, `Property`.
//! - [`from_separated_case`] joins `_` or `-` delimited components into
//!   camelCase, keeping leading and trailing separator runs as they are.
//!
//! Every conversion is total: the empty string and separator-only strings
//! come back unchanged. Only the first-character helpers reject empty input.

use std::ops::Range;

use scribe_core::chars::{CharCategory, categorize_char};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
  Tendril,
  inflection::{English, Inflector},
};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CaseError {
  #[error("cannot change the case of the first character of an empty string")]
  EmptyInput,
}

type Result<T> = std::result::Result<T, CaseError>;

/// Byte ranges of the words of an identifier, in order. The ranges tile the
/// input without gaps.
pub type WordRanges = SmallVec<[Range<usize>; 4]>;

/// Splits `text` into camelCase words.
///
/// The first character always starts the first word, whatever its case.
pub fn camel_case_word_ranges(text: &str) -> WordRanges {
  let mut words = WordRanges::new();
  let Some(first) = text.chars().next() else {
    return words;
  };

  let mut word_start = 0;
  let mut search_start = first.len_utf8();

  while let Some(upper) = find_category(text, search_start, CharCategory::Upper) {
    words.push(word_start..upper);

    let Some(lower) = find_category(text, upper, CharCategory::Lower) else {
      // Nothing but uppercase and non-letters left: one final word.
      word_start = upper;
      break;
    };

    if lower == upper + char_len_at(text, upper) {
      // A single capital starts a regular word; keep looking for the next
      // uppercase letter.
      word_start = upper;
    } else {
      // An acronym run. Its last capital belongs to the word that follows.
      let before_lower = prev_char_start(text, lower);
      words.push(upper..before_lower);
      word_start = before_lower;
    }
    search_start = lower + char_len_at(text, lower);
  }

  words.push(word_start..text.len());
  words
}

fn find_category(text: &str, from: usize, category: CharCategory) -> Option<usize> {
  text[from..]
    .char_indices()
    .find(|&(_, ch)| categorize_char(ch) == category)
    .map(|(idx, _)| from + idx)
}

fn char_len_at(text: &str, idx: usize) -> usize {
  text[idx..].chars().next().map_or(0, char::len_utf8)
}

fn prev_char_start(text: &str, idx: usize) -> usize {
  text[..idx]
    .chars()
    .next_back()
    .map_or(idx, |ch| idx - ch.len_utf8())
}

/// The camelCase words of `text` with their original casing.
pub fn to_camel_case_components(text: &str) -> Vec<&str> {
  camel_case_word_ranges(text)
    .into_iter()
    .map(|range| &text[range])
    .collect()
}

pub fn to_snake_case(text: &str) -> Tendril {
  let mut res = Tendril::new();
  to_snake_case_with(text, &mut res);
  res
}

pub fn to_snake_case_with(text: &str, buf: &mut Tendril) {
  to_separated_case_with(text, buf, '_');
}

pub fn to_kebab_case(text: &str) -> Tendril {
  let mut res = Tendril::new();
  to_kebab_case_with(text, &mut res);
  res
}

pub fn to_kebab_case_with(text: &str, buf: &mut Tendril) {
  to_separated_case_with(text, buf, '-');
}

/// Shared implementation for snake_case and kebab-case: the camelCase words
/// of `text`, lowercased and joined with `sep`.
fn to_separated_case_with(text: &str, buf: &mut Tendril, sep: char) {
  for (idx, range) in camel_case_word_ranges(text).into_iter().enumerate() {
    if idx > 0 {
      buf.push(sep);
    }
    buf.push_str(&text[range].to_lowercase());
  }
}

/// Converts `text` to camelCase.
///
/// Text containing `_` is treated as snake_case, anything else as
/// kebab-case. A `-` inside snake_case text is left embedded in its word.
pub fn to_camel_case(text: &str) -> Tendril {
  let mut res = Tendril::new();
  to_camel_case_with(text, &mut res);
  res
}

pub fn to_camel_case_with(text: &str, buf: &mut Tendril) {
  let sep = if text.contains('_') { '_' } else { '-' };
  from_separated_case_with(text, sep, buf);
}

/// Joins the `sep` delimited components of `text` into camelCase.
///
/// The first component is lowercased; every later one gets an uppercase first
/// character and lowercase rest. A single component is taken to be camelCase
/// already and is left untouched. Runs of `sep` at either end are kept.
pub fn from_separated_case(text: &str, sep: char) -> Tendril {
  let mut res = Tendril::new();
  from_separated_case_with(text, sep, &mut res);
  res
}

pub fn from_separated_case_with(text: &str, sep: char, buf: &mut Tendril) {
  let Some(start) = text.find(|ch: char| ch != sep) else {
    // Empty, or nothing but separators.
    buf.push_str(text);
    return;
  };
  // There is a non-separator at `start`, so the trimmed end lies past it.
  let end = text.trim_end_matches(sep).len();
  let (leading, core, trailing) = (&text[..start], &text[start..end], &text[end..]);

  buf.push_str(leading);

  let components: SmallVec<[&str; 4]> = core.split(sep).filter(|c| !c.is_empty()).collect();
  match components.split_first() {
    Some((first, rest)) if !rest.is_empty() => {
      buf.push_str(&first.to_lowercase());
      for component in rest {
        push_capitalized(component, buf);
      }
    },
    _ => buf.push_str(core),
  }

  buf.push_str(trailing);
}

fn push_capitalized(word: &str, buf: &mut Tendril) {
  let mut chars = word.chars();
  if let Some(first) = chars.next() {
    buf.extend(first.to_uppercase());
    buf.push_str(&chars.as_str().to_lowercase());
  }
}

/// Uppercases the first character of `text`, leaving the rest alone.
pub fn uppercase_first(text: &str) -> Result<Tendril> {
  let mut chars = text.chars();
  let first = chars.next().ok_or(CaseError::EmptyInput)?;
  let mut res = Tendril::new();
  res.extend(first.to_uppercase());
  res.push_str(chars.as_str());
  Ok(res)
}

/// Lowercases the first character of `text`, leaving the rest alone.
pub fn lowercase_first(text: &str) -> Result<Tendril> {
  let mut chars = text.chars();
  let first = chars.next().ok_or(CaseError::EmptyInput)?;
  let mut res = Tendril::new();
  res.extend(first.to_lowercase());
  res.push_str(chars.as_str());
  Ok(res)
}

pub fn upper_camel_case(text: &str) -> Result<Tendril> {
  uppercase_first(&to_camel_case(text))
}

pub fn lower_camel_case(text: &str) -> Result<Tendril> {
  lowercase_first(&to_camel_case(text))
}

/// Applies `transform` to the last camelCase word of `text` and keeps every
/// word before it unchanged. Empty input gives an empty string.
pub fn transform_last_component<F>(text: &str, transform: F) -> String
where
  F: FnOnce(&str) -> String,
{
  let words = camel_case_word_ranges(text);
  let Some(last) = words.last() else {
    return String::new();
  };

  // The words tile the input, so everything before the last one is a prefix.
  let mut res = String::with_capacity(text.len() + 4);
  res.push_str(&text[..last.start]);
  res.push_str(&transform(&text[last.clone()]));
  res
}

/// `smartGoose` becomes `smartGeese`.
pub fn pluralize_last_component(text: &str) -> String {
  English.pluralize_last_component(text)
}

/// `smartGeese` becomes `smartGoose`.
pub fn singularize_last_component(text: &str) -> String {
  English.singularize_last_component(text)
}
