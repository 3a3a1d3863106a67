//! Where sort-name overrides come from.

use crate::mapping_store::{MappingStore, MappingTable, StoreError};

/// Source of manual sort-name overrides.
pub trait SortOverrides {
    fn lookup(&self, name: &str) -> Result<Option<String>, StoreError>;
}

/// Re-reads the file on every lookup, so edits show up immediately.
impl SortOverrides for MappingStore {
    fn lookup(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.get_mapping(name)
    }
}

/// A snapshot loaded once, for callers generating many keys in a row.
impl SortOverrides for MappingTable {
    fn lookup(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(name.trim()).cloned())
    }
}
