//! `setlist delete <artist>` – remove an override; fails if there is none.

use anyhow::{bail, Result};
use setlist_core::mapping_store::MappingStore;

pub fn run_delete(store: &MappingStore, artist: &str) -> Result<()> {
    if !store.delete_mapping(artist)? {
        bail!("no mapping found for {:?}", artist.trim());
    }
    println!("Deleted mapping for {}", artist.trim());
    Ok(())
}
