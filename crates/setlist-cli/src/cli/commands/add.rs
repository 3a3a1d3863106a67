//! `setlist add <artist> <sort_name>` – add or replace a sort-name override.

use anyhow::Result;
use setlist_core::mapping_store::{MappingChange, MappingStore};

pub fn run_add(store: &MappingStore, artist: &str, sort_name: &str) -> Result<()> {
    match store.save_mapping(artist, sort_name)? {
        MappingChange::Added => {
            println!("Added: {} -> {}", artist.trim(), sort_name.trim());
        }
        MappingChange::Updated { previous } => {
            println!(
                "Updated: {} -> {} (was {})",
                artist.trim(),
                sort_name.trim(),
                previous
            );
        }
    }
    Ok(())
}
