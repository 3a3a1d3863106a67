//! `setlist update <artist> <sort_name>` – change a sort name; missing artists are added.

use anyhow::Result;
use setlist_core::mapping_store::{MappingChange, MappingStore};

/// Returns the store's change so callers can tell an add from a replace.
pub fn run_update(store: &MappingStore, artist: &str, sort_name: &str) -> Result<MappingChange> {
    let change = store.save_mapping(artist, sort_name)?;
    match &change {
        MappingChange::Added => {
            println!(
                "{} had no mapping; added: {} -> {}",
                artist.trim(),
                artist.trim(),
                sort_name.trim()
            );
        }
        MappingChange::Updated { previous } => {
            println!("Updated: {} -> {} (was {})", artist.trim(), sort_name.trim(), previous);
        }
    }
    Ok(change)
}
