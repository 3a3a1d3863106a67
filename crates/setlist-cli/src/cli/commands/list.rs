//! `setlist list` – show all overrides.

use anyhow::Result;
use setlist_core::mapping_store::{MappingStore, MappingTable};

pub fn run_list(store: &MappingStore) -> Result<()> {
    let table = store.get_all_mappings()?;
    print!("{}", render_list(&table));
    Ok(())
}

/// Two aligned columns sorted by artist, or a notice when empty.
pub(super) fn render_list(table: &MappingTable) -> String {
    if table.is_empty() {
        return "No mappings.\n".to_string();
    }
    let width = table
        .keys()
        .map(|a| a.chars().count())
        .max()
        .unwrap_or(0)
        .max("ARTIST".len());

    let mut out = format!("{:<width$}  {}\n", "ARTIST", "SORT NAME", width = width);
    for (artist, sort_name) in table {
        out.push_str(&format!("{:<width$}  {}\n", artist, sort_name, width = width));
    }
    out.push_str(&format!("{} mapping(s)\n", table.len()));
    out
}
