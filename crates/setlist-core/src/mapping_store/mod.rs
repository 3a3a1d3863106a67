//! Flat-file store for manual artist sort-name overrides.
//!
//! The whole table is read on every operation and rewritten on every mutation,
//! so the file on disk is always a complete snapshot. There is no locking:
//! concurrent writers on the same path can lose updates (last rename wins).

mod error;
mod format;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use error::{StoreError, WriteCause};
pub use format::{HEADER_LABEL, HEADER_LINE};

/// Artist → sort name. Ordered so snapshots are written in a stable order.
pub type MappingTable = BTreeMap<String, String>;

/// Result of a successful `save_mapping`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingChange {
    /// The artist had no mapping before.
    Added,
    /// The artist already had a mapping, now replaced.
    Updated { previous: String },
}

impl MappingChange {
    pub fn was_new(&self) -> bool {
        matches!(self, MappingChange::Added)
    }
}

/// Mapping store bound to one TSV file.
#[derive(Debug, Clone)]
pub struct MappingStore {
    path: PathBuf,
}

impl MappingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole table. A missing or empty file is an empty table.
    pub fn load(&self) -> Result<MappingTable, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "mapping file missing; empty table");
                return Ok(MappingTable::new());
            }
            Err(e) => {
                return Err(StoreError::Load {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        let text = String::from_utf8(bytes).map_err(|e| StoreError::Encoding {
            path: self.path.clone(),
            source: e,
        })?;
        let table = format::parse_table(&text)?;
        tracing::debug!(path = %self.path.display(), entries = table.len(), "loaded mapping file");
        Ok(table)
    }

    /// `load`, but an unusable file (bad format or encoding) reads as empty.
    fn load_tolerant(&self) -> Result<MappingTable, StoreError> {
        match self.load() {
            Err(e) if e.is_format_level() => {
                tracing::warn!(path = %self.path.display(), "ignoring unusable mapping file: {}", e);
                Ok(MappingTable::new())
            }
            other => other,
        }
    }

    /// Inserts or replaces the mapping for `artist`, then rewrites the file.
    ///
    /// An unusable existing file is discarded and replaced by a table holding
    /// only this mapping.
    pub fn save_mapping(&self, artist: &str, sort_name: &str) -> Result<MappingChange, StoreError> {
        let artist = validate_field("artist", artist)?;
        let sort_name = validate_field("sort name", sort_name)?;

        let mut table = self.load_tolerant()?;
        let change = match table.insert(artist.to_string(), sort_name.to_string()) {
            None => MappingChange::Added,
            Some(previous) => MappingChange::Updated { previous },
        };
        self.write_table(&table)?;
        tracing::info!(artist, sort_name, new = change.was_new(), "saved sort mapping");
        Ok(change)
    }

    /// Sort name stored for `artist`, if any.
    pub fn get_mapping(&self, artist: &str) -> Result<Option<String>, StoreError> {
        let mut table = self.load_tolerant()?;
        Ok(table.remove(artist.trim()))
    }

    /// Every stored mapping, for listing.
    pub fn get_all_mappings(&self) -> Result<MappingTable, StoreError> {
        self.load_tolerant()
    }

    /// Removes the mapping for `artist`. Returns false (and writes nothing)
    /// when there was none.
    pub fn delete_mapping(&self, artist: &str) -> Result<bool, StoreError> {
        let artist = artist.trim();
        let mut table = self.load_tolerant()?;
        if table.remove(artist).is_none() {
            return Ok(false);
        }
        self.write_table(&table)?;
        tracing::info!(artist, "deleted sort mapping");
        Ok(true)
    }

    /// Writes a full snapshot to a temp file beside the target, then renames it into place.
    fn write_table(&self, table: &MappingTable) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| StoreError::write(self.path.clone(), e))?;

        let contents = format::render_table(table);
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| StoreError::write(self.path.clone(), e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::write(self.path.clone(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::write(self.path.clone(), e.error))?;

        tracing::debug!(path = %self.path.display(), entries = table.len(), "wrote mapping file");
        Ok(())
    }
}

/// Trims and checks a value that is about to be written.
fn validate_field<'a>(what: &str, value: &'a str) -> Result<&'a str, StoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StoreError::InvalidInput(format!("{} must not be blank", what)));
    }
    if value.contains(['\t', '\n', '\r']) {
        return Err(StoreError::InvalidInput(format!(
            "{} must not contain tabs or line breaks: {:?}",
            what, value
        )));
    }
    Ok(value)
}
