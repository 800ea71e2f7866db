//! Unique keyed index over row snapshots.
//!
//! The database bindings this replaces expose lookups through a mutable
//! "probe row": init a blank row, set its key columns, query, destroy the
//! row. Here an index is a plain map from a complete key value to the row,
//! and a lookup is a pure function of that key. A row that lacks one of an
//! index's key fields is simply never inserted into that index.

use std::borrow::Borrow;
use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;
use std::sync::Arc;
use thiserror::Error;

/// Error type for index maintenance operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The key is already mapped to a row.
    #[error("duplicate key in unique index")]
    DuplicateKey,
}

/// A read-mostly map enforcing a uniqueness constraint from the schema.
///
/// Because each index mirrors a unique constraint at the data-model level,
/// at most one row can ever match a key; `find` therefore returns a single
/// row or nothing, never a set. Rows are shared with sibling indexes over
/// the same table via `Arc`.
#[derive(Debug, Clone)]
pub struct UniqueIndex<K, R> {
    rows: HashMap<K, Arc<R>>,
}

impl<K, R> UniqueIndex<K, R>
where
    K: Eq + Hash,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Returns the number of indexed rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows are indexed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up the unique row matching `key`.
    ///
    /// Read-only; never creates entries. Returns `None` when no row
    /// carries the key, which is an ordinary outcome in a live topology.
    pub fn find<Q>(&self, key: &Q) -> Option<&R>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.get(key).map(Arc::as_ref)
    }

    /// Maps `key` to `row`, rejecting duplicates.
    ///
    /// Maintenance entry point for the replication layer; a duplicate key
    /// means the incoming update violates the schema's unique constraint.
    pub fn insert(&mut self, key: K, row: Arc<R>) -> Result<(), IndexError> {
        match self.rows.entry(key) {
            Entry::Occupied(_) => Err(IndexError::DuplicateKey),
            Entry::Vacant(slot) => {
                slot.insert(row);
                Ok(())
            }
        }
    }

    /// Removes the row mapped to `key`, if any.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Arc<R>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.remove(key)
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Iterates over key/row pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &R)> {
        self.rows.iter().map(|(key, row)| (key, row.as_ref()))
    }
}

impl<K, R> Default for UniqueIndex<K, R>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_missing_key() {
        let index: UniqueIndex<String, u32> = UniqueIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.find("missing"), None);
    }

    #[test]
    fn test_insert_then_find() {
        let mut index: UniqueIndex<String, u32> = UniqueIndex::new();
        index.insert("k".to_string(), Arc::new(7)).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.find("k"), Some(&7));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut index: UniqueIndex<String, u32> = UniqueIndex::new();
        index.insert("k".to_string(), Arc::new(7)).unwrap();

        let err = index.insert("k".to_string(), Arc::new(8)).unwrap_err();
        assert_eq!(err, IndexError::DuplicateKey);
        // The original mapping survives.
        assert_eq!(index.find("k"), Some(&7));
    }

    #[test]
    fn test_remove() {
        let mut index: UniqueIndex<String, u32> = UniqueIndex::new();
        index.insert("k".to_string(), Arc::new(7)).unwrap();

        let removed = index.remove("k");
        assert_eq!(removed.as_deref(), Some(&7));
        assert_eq!(index.find("k"), None);
        assert_eq!(index.remove("k"), None);
    }

    #[test]
    fn test_composite_key() {
        let mut index: UniqueIndex<(u64, u64), &str> = UniqueIndex::new();
        index.insert((5, 3), Arc::new("p")).unwrap();

        assert_eq!(index.find(&(5, 3)), Some(&"p"));
        assert_eq!(index.find(&(5, 4)), None);
        assert_eq!(index.find(&(6, 3)), None);
    }

    #[test]
    fn test_rows_shared_between_indexes() {
        let row = Arc::new("row".to_string());
        let mut by_name: UniqueIndex<String, String> = UniqueIndex::new();
        let mut by_key: UniqueIndex<u64, String> = UniqueIndex::new();

        by_name.insert("r".to_string(), Arc::clone(&row)).unwrap();
        by_key.insert(1, row).unwrap();

        assert!(std::ptr::eq(
            by_name.find("r").unwrap(),
            by_key.find(&1).unwrap()
        ));
    }
}
