//! Extensions for iterators.

use thiserror::Error;

/// No element satisfied the predicate passed to
/// [`IteratorExt::first_element`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no element matches the predicate")]
pub struct ElementNotFound;

pub trait IteratorExt: Iterator + Sized {
  /// Like [`Iterator::find`], but a miss is an error the caller can recover
  /// from with `?`, `unwrap_or` and friends.
  fn first_element<P>(self, predicate: P) -> Result<Self::Item, ElementNotFound>
  where
    P: FnMut(&Self::Item) -> bool;

  /// Fallible variant of [`IteratorExt::first_element`]. The first error
  /// returned by `predicate` stops the search.
  fn try_first_element<P, E>(self, predicate: P) -> Result<Self::Item, E>
  where
    P: FnMut(&Self::Item) -> Result<bool, E>,
    E: From<ElementNotFound>;
}

impl<I: Iterator> IteratorExt for I {
  fn first_element<P>(mut self, predicate: P) -> Result<Self::Item, ElementNotFound>
  where
    P: FnMut(&Self::Item) -> bool,
  {
    self.find(predicate).ok_or(ElementNotFound)
  }

  fn try_first_element<P, E>(self, mut predicate: P) -> Result<Self::Item, E>
  where
    P: FnMut(&Self::Item) -> Result<bool, E>,
    E: From<ElementNotFound>,
  {
    for item in self {
      if predicate(&item)? {
        return Ok(item);
      }
    }
    Err(ElementNotFound.into())
  }
}
