//! Ordered string key collections with membership testing.
//!
//! Manifest-declared keys and live-reported keys use the same container, so
//! the comparator has exactly one input shape to reason about.

use std::collections::HashSet;

/// An ordered collection of string keys.
///
/// Enumeration preserves the order keys were supplied in and keeps
/// duplicates; membership testing is set-like. "Set" here means "used for
/// membership testing", not "deduplicated on enumeration".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeySet {
  items: Vec<String>,
  index: HashSet<String>,
}

impl KeySet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a key, keeping it available for membership tests.
  pub fn insert(&mut self, key: impl Into<String>) {
    let key = key.into();
    self.index.insert(key.clone());
    self.items.push(key);
  }

  pub fn contains(&self, key: &str) -> bool {
    self.index.contains(key)
  }

  /// Keys in insertion order, duplicates included.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.items.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let mut set = KeySet::new();
    for key in iter {
      set.insert(key);
    }
    set
  }
}
