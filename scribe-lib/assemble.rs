//! Declarative assembly of line blocks.
//!
//! Generators describe output as a sequence of fragments: literal text
//! (multi-line text is split), nested blocks, fragments present only under a
//! condition, a choice between two fragments, and fragments repeated over a
//! collection. Assembly flattens them left to right into one [`LineBlock`].
//! Nothing is reordered, deduplicated or reformatted; an absent fragment
//! contributes no lines.
//!
//! Two front ends share these semantics. [`Fragment`] is a value that can be
//! built up and handed around before [`assemble`] flattens it:
//!
//! ```
//! use scribe_lib::{Fragment, assemble};
//!
//! let fields = ["x", "y"];
//! let block = assemble([
//!   Fragment::from("struct Point {"),
//!   Fragment::repeat(fields, |field| format!("  {field}: f64,").into()),
//!   Fragment::from("}"),
//! ]);
//! assert_eq!(block.render(), "struct Point {\n  x: f64,\n  y: f64,\n}");
//! ```
//!
//! [`BlockBuilder`] is the fluent form, with closures for the conditional and
//! repeated parts:
//!
//! ```
//! use scribe_lib::LineBlock;
//!
//! let public = true;
//! let block = LineBlock::build(|b| {
//!   b.when(public, |b| b.text("#[derive(Debug)]"))
//!     .either(public, |b| b.text("pub struct Unit;"), |b| b.text("struct Unit;"))
//! });
//! assert_eq!(block.render(), "#[derive(Debug)]\npub struct Unit;");
//! ```

use crate::line::{Line, LineBlock, ToLines};

/// One piece of a block description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
  /// Text split into lines on assembly.
  Text(String),
  Line(Line),
  Block(LineBlock),
  /// Contributes nothing when absent.
  Optional(Option<Box<Fragment>>),
  /// Fragments flattened in order. Repetition builds one of these.
  Group(Vec<Fragment>),
}

impl Fragment {
  /// The fragment that contributes no lines.
  pub fn empty() -> Self {
    Fragment::Optional(None)
  }

  /// `fragment` if `condition` holds. `fragment` only runs when it does.
  pub fn when<F>(condition: bool, fragment: F) -> Self
  where
    F: FnOnce() -> Fragment,
  {
    Fragment::Optional(condition.then(|| Box::new(fragment())))
  }

  /// Exactly one of `first` and `second` runs, chosen by `condition`.
  pub fn either<A, B>(condition: bool, first: A, second: B) -> Self
  where
    A: FnOnce() -> Fragment,
    B: FnOnce() -> Fragment,
  {
    if condition { first() } else { second() }
  }

  /// One fragment per item, in the order `items` yields them.
  pub fn repeat<I, F>(items: I, fragment: F) -> Self
  where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fragment,
  {
    Fragment::Group(items.into_iter().map(fragment).collect())
  }

  /// Appends the lines of this fragment to `out`.
  fn flatten_into(self, out: &mut LineBlock) {
    match self {
      Fragment::Text(text) => out.append(LineBlock::from(text)),
      Fragment::Line(line) => out.push(line),
      Fragment::Block(block) => out.append(block),
      Fragment::Optional(fragment) => {
        if let Some(fragment) = fragment {
          fragment.flatten_into(out);
        }
      },
      Fragment::Group(fragments) => {
        for fragment in fragments {
          fragment.flatten_into(out);
        }
      },
    }
  }

  pub fn into_block(self) -> LineBlock {
    let mut block = LineBlock::new();
    self.flatten_into(&mut block);
    block
  }
}

impl From<&str> for Fragment {
  fn from(text: &str) -> Self {
    Fragment::Text(text.to_owned())
  }
}

impl From<String> for Fragment {
  fn from(text: String) -> Self {
    Fragment::Text(text)
  }
}

impl From<Line> for Fragment {
  fn from(line: Line) -> Self {
    Fragment::Line(line)
  }
}

impl From<LineBlock> for Fragment {
  fn from(block: LineBlock) -> Self {
    Fragment::Block(block)
  }
}

impl<T: Into<Fragment>> From<Option<T>> for Fragment {
  fn from(fragment: Option<T>) -> Self {
    Fragment::Optional(fragment.map(|f| Box::new(f.into())))
  }
}

impl<T: Into<Fragment>> From<Vec<T>> for Fragment {
  fn from(fragments: Vec<T>) -> Self {
    Fragment::Group(fragments.into_iter().map(Into::into).collect())
  }
}

impl FromIterator<Fragment> for Fragment {
  fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
    Fragment::Group(iter.into_iter().collect())
  }
}

impl From<Fragment> for LineBlock {
  fn from(fragment: Fragment) -> Self {
    fragment.into_block()
  }
}

/// Flattens `fragments` into one block, in order.
pub fn assemble<I>(fragments: I) -> LineBlock
where
  I: IntoIterator,
  I::Item: Into<Fragment>,
{
  let mut block = LineBlock::new();
  let mut count = 0usize;
  for fragment in fragments {
    let fragment: Fragment = fragment.into();
    fragment.flatten_into(&mut block);
    count += 1;
  }
  tracing::trace!(fragments = count, lines = block.len(), "assembled line block");
  block
}

/// Fluent block construction.
///
/// Each method appends at the current end of the block, so the output order
/// is the order of the calls. Closures receive a fresh builder for their own
/// fragment; what they build is appended in place.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct BlockBuilder {
  block: LineBlock,
}

impl BlockBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Literal text; multi-line text becomes several lines.
  pub fn text(mut self, text: impl AsRef<str>) -> Self {
    self.block.append(LineBlock::from(text.as_ref()));
    self
  }

  pub fn line(mut self, line: Line) -> Self {
    self.block.push(line);
    self
  }

  /// Anything that presents itself as lines: blocks, doc comments, text.
  pub fn lines(mut self, lines: impl ToLines) -> Self {
    self.block.append(lines.to_lines());
    self
  }

  pub fn empty_line(self) -> Self {
    self.line(Line::empty())
  }

  pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
    let fragment: Fragment = fragment.into();
    fragment.flatten_into(&mut self.block);
    self
  }

  /// Nested sub-block built by `build`.
  pub fn nest<F>(mut self, build: F) -> Self
  where
    F: FnOnce(BlockBuilder) -> BlockBuilder,
  {
    self.block.append(build(BlockBuilder::new()).build());
    self
  }

  /// The lines of `lines` if present, nothing otherwise.
  pub fn optional<T: ToLines>(self, lines: Option<T>) -> Self {
    match lines {
      Some(lines) => self.lines(lines),
      None => self,
    }
  }

  /// Runs `build` only if `condition` holds.
  pub fn when<F>(self, condition: bool, build: F) -> Self
  where
    F: FnOnce(BlockBuilder) -> BlockBuilder,
  {
    if condition { self.nest(build) } else { self }
  }

  /// Runs exactly one of `first` and `second`.
  pub fn either<A, B>(self, condition: bool, first: A, second: B) -> Self
  where
    A: FnOnce(BlockBuilder) -> BlockBuilder,
    B: FnOnce(BlockBuilder) -> BlockBuilder,
  {
    if condition {
      self.nest(first)
    } else {
      self.nest(second)
    }
  }

  /// Runs `build` once per item, in the order `items` yields them.
  pub fn each<I, F>(mut self, items: I, mut build: F) -> Self
  where
    I: IntoIterator,
    F: FnMut(BlockBuilder, I::Item) -> BlockBuilder,
  {
    for item in items {
      self.block.append(build(BlockBuilder::new(), item).build());
    }
    self
  }

  pub fn build(self) -> LineBlock {
    self.block
  }
}
