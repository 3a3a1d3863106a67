//! Handler tests against a scratch mapping file.

use setlist_core::mapping_store::{MappingChange, MappingStore, MappingTable};
use tempfile::tempdir;

use super::list::render_list;
use super::{run_add, run_delete, run_update};

fn scratch_store(dir: &tempfile::TempDir) -> MappingStore {
    MappingStore::new(dir.path().join("map.tsv"))
}

#[test]
fn add_then_delete() {
    let dir = tempdir().unwrap();
    let store = scratch_store(&dir);
    run_add(&store, "Aimer", "えいめ").unwrap();
    assert_eq!(store.get_mapping("Aimer").unwrap().as_deref(), Some("えいめ"));
    run_delete(&store, "Aimer").unwrap();
    assert_eq!(store.get_mapping("Aimer").unwrap(), None);
}

#[test]
fn delete_missing_is_an_error() {
    let dir = tempdir().unwrap();
    let store = scratch_store(&dir);
    let err = run_delete(&store, "ghost").unwrap_err();
    assert!(err.to_string().contains("no mapping found"));
}

#[test]
fn update_missing_adds() {
    let dir = tempdir().unwrap();
    let store = scratch_store(&dir);
    let change = run_update(&store, "Ado", "あど").unwrap();
    assert_eq!(change, MappingChange::Added);
    assert_eq!(store.get_mapping("Ado").unwrap().as_deref(), Some("あど"));

    let change = run_update(&store, "Ado", "あどう").unwrap();
    assert!(!change.was_new());
    assert_eq!(store.get_mapping("Ado").unwrap().as_deref(), Some("あどう"));
}

#[test]
fn add_rejects_blank_artist() {
    let dir = tempdir().unwrap();
    let store = scratch_store(&dir);
    assert!(run_add(&store, "  ", "x").is_err());
}

#[test]
fn list_rendering() {
    assert_eq!(render_list(&MappingTable::new()), "No mappings.\n");

    let mut table = MappingTable::new();
    table.insert("LiSA".into(), "りさ".into());
    table.insert("Ado".into(), "あど".into());
    let out = render_list(&table);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "ARTIST  SORT NAME");
    assert_eq!(lines[1], "Ado     あど");
    assert_eq!(lines[2], "LiSA    りさ");
    assert_eq!(lines[3], "2 mapping(s)");
}
