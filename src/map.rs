//! Ordered field map for record values.
//!
//! This module provides [`FieldMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for record fields. Order matters here: the
//! formatter renders a record's externally-visible fields in declaration
//! order, and insertion order is how that order is carried.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: fields format in a consistent order
//! - **Declaration order**: fields iterate in the order they were inserted
//! - **Predictability**: easier testing and debugging
//!
//! ## Examples
//!
//! ```rust
//! use litrep::{FieldMap, Value};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("Name".to_string(), Value::from("Alice"));
//! fields.insert("Age".to_string(), Value::from(30));
//!
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields.get("Name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;

/// An ordered map of field names to values.
///
/// A thin wrapper around [`IndexMap`] that maintains insertion order, which
/// stands in for a record type's field declaration order.
///
/// # Examples
///
/// ```rust
/// use litrep::{FieldMap, Value};
///
/// let mut fields = FieldMap::new();
/// fields.insert("First".to_string(), Value::from(1));
/// fields.insert("Second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let names: Vec<_> = fields.keys().cloned().collect();
/// assert_eq!(names, vec!["First", "Second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldMap(IndexMap<String, crate::Value>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field into the map.
    ///
    /// If the map already contained this field name, the old value is
    /// returned and the field keeps its original position.
    pub fn insert(&mut self, name: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(name, value)
    }

    /// Returns a reference to the value of the named field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&crate::Value> {
        self.0.get(name)
    }

    /// Returns the number of fields in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over field names, in declaration order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over field values, in declaration order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over `(name, value)` pairs, in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}
