//! `setlist sort-key <name>` – preview the sort key for a name.

use setlist_core::config::SetlistConfig;
use setlist_core::mapping_store::MappingStore;

pub fn run_sort_key(cfg: &SetlistConfig, store: &MappingStore, name: &str) {
    let key = cfg.sort_name_generator().with_overrides(store).generate(name);
    println!("{}", key);
}
