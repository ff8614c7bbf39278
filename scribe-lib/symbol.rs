//! Identifiers that are safe to emit as symbol names.
//!
//! Generated names are checked against the reserved words of the emitted
//! language (Swift: keywords used in declarations, in statements, and in
//! expressions and types). A name that collides is escaped with backticks.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use scribe_stdx::quote::QuoteExt;

const DECLARATION_KEYWORDS: &[&str] = &[
  "actor",
  "associatedtype",
  "borrowing",
  "class",
  "consuming",
  "deinit",
  "enum",
  "extension",
  "fileprivate",
  "func",
  "import",
  "init",
  "inout",
  "internal",
  "let",
  "nonisolated",
  "open",
  "operator",
  "private",
  "precedencegroup",
  "protocol",
  "public",
  "rethrows",
  "static",
  "struct",
  "subscript",
  "typealias",
  "var",
];

const STATEMENT_KEYWORDS: &[&str] = &[
  "break",
  "case",
  "catch",
  "continue",
  "default",
  "defer",
  "do",
  "else",
  "fallthrough",
  "for",
  "guard",
  "if",
  "in",
  "repeat",
  "return",
  "throw",
  "switch",
  "where",
  "while",
];

const EXPRESSION_AND_TYPE_KEYWORDS: &[&str] = &[
  "Any", "as", "await", "catch", "false", "is", "nil", "rethrows", "self", "Self", "super",
  "throw", "throws", "true", "try",
];

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
  DECLARATION_KEYWORDS
    .iter()
    .chain(STATEMENT_KEYWORDS)
    .chain(EXPRESSION_AND_TYPE_KEYWORDS)
    .copied()
    .collect()
});

/// Returns true if `name` is a reserved word. Matching is case sensitive.
pub fn is_keyword(name: &str) -> bool {
  KEYWORDS.contains(name)
}

/// Turns `name` into a usable symbol name: dots become underscores, and a
/// reserved word is wrapped in backticks.
pub fn safe_symbol_name(name: &str) -> String {
  let name = name.replace('.', "_");
  if is_keyword(&name) {
    name.tick_quoted()
  } else {
    name
  }
}
