//! Singular and plural forms of words.
//!
//! Case conversion only decides *where* an inflection applies (the last word
//! of a camelCase identifier); the language rules live behind [`Inflector`].

use inflector::string::{pluralize::to_plural, singularize::to_singular};

use crate::case_convention::transform_last_component;

pub trait Inflector {
  fn pluralize(&self, word: &str) -> String;

  fn singularize(&self, word: &str) -> String;

  /// Pluralizes the last camelCase word of `text`.
  fn pluralize_last_component(&self, text: &str) -> String {
    transform_last_component(text, |word| self.pluralize(word))
  }

  /// Singularizes the last camelCase word of `text`.
  fn singularize_last_component(&self, text: &str) -> String {
    transform_last_component(text, |word| self.singularize(word))
  }
}

/// English nouns. Irregular forms are looked up first, everything else goes
/// through the rule set of the `Inflector` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct English;

/// `(singular, plural)`, lowercase.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
  ("child", "children"),
  ("die", "dice"),
  ("foot", "feet"),
  ("goose", "geese"),
  ("louse", "lice"),
  ("man", "men"),
  ("mouse", "mice"),
  ("ox", "oxen"),
  ("person", "people"),
  ("tooth", "teeth"),
  ("woman", "women"),
];

impl Inflector for English {
  fn pluralize(&self, word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, plural)) = IRREGULAR_NOUNS.iter().find(|(singular, _)| *singular == lower) {
      return match_case(word, plural);
    }
    if IRREGULAR_NOUNS.iter().any(|(_, plural)| *plural == lower) {
      return word.to_owned();
    }
    to_plural(word)
  }

  fn singularize(&self, word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((singular, _)) = IRREGULAR_NOUNS.iter().find(|(_, plural)| *plural == lower) {
      return match_case(word, singular);
    }
    if IRREGULAR_NOUNS.iter().any(|(singular, _)| *singular == lower) {
      return word.to_owned();
    }
    to_singular(word)
  }
}

/// Spells the lowercase `form` with the casing of `word`: all caps, a
/// leading capital, or lowercase.
fn match_case(word: &str, form: &str) -> String {
  let mut letters = word.chars().filter(|ch| ch.is_alphabetic());
  let Some(first) = letters.next() else {
    return form.to_owned();
  };

  if first.is_uppercase() && word.chars().count() > 1 && letters.all(char::is_uppercase) {
    form.to_uppercase()
  } else if first.is_uppercase() {
    let mut chars = form.chars();
    chars
      .next()
      .map(|head| head.to_uppercase().chain(chars).collect())
      .unwrap_or_default()
  } else {
    form.to_owned()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  struct Shouting;

  impl Inflector for Shouting {
    fn pluralize(&self, word: &str) -> String {
      format!("{}S", word.to_uppercase())
    }

    fn singularize(&self, word: &str) -> String {
      word.trim_end_matches('S').to_lowercase()
    }
  }

  #[test]
  fn irregular_nouns() {
    assert_eq!(English.pluralize("goose"), "geese");
    assert_eq!(English.pluralize("Goose"), "Geese");
    assert_eq!(English.pluralize("GOOSE"), "GEESE");
    assert_eq!(English.pluralize("Person"), "People");
    assert_eq!(English.singularize("geese"), "goose");
    assert_eq!(English.singularize("Geese"), "Goose");
    assert_eq!(English.singularize("Children"), "Child");
    assert_eq!(English.singularize("men"), "man");
  }

  #[test]
  fn irregular_forms_are_not_inflected_twice() {
    assert_eq!(English.pluralize("People"), "People");
    assert_eq!(English.pluralize("geese"), "geese");
    assert_eq!(English.singularize("Person"), "Person");
    assert_eq!(English.singularize("mouse"), "mouse");
    assert_eq!(English.pluralize_last_component("smartChildren"), "smartChildren");
  }

  #[test]
  fn regular_nouns() {
    assert_eq!(English.pluralize("world"), "worlds");
    assert_eq!(English.pluralize("World"), "Worlds");
    assert_eq!(English.singularize("worlds"), "world");
    assert_eq!(English.singularize("Worlds"), "World");
  }

  #[test]
  fn last_component_only() {
    assert_eq!(English.pluralize_last_component("smartGoose"), "smartGeese");
    assert_eq!(English.singularize_last_component("smartGeese"), "smartGoose");
    assert_eq!(English.pluralize_last_component("policeMan"), "policeMen");
    assert_eq!(English.pluralize_last_component(""), "");
  }

  #[test]
  fn custom_inflector() {
    assert_eq!(Shouting.pluralize_last_component("smartGoose"), "smartGOOSES");
    assert_eq!(Shouting.singularize_last_component("allITEMS"), "allitem");
  }
}
