//! Integration test: per-row catalog work against a real mapping file.
//!
//! Curates overrides through the store, then builds sort keys and timestamped
//! links the way the table renderer does for each performance row.

use setlist_core::mapping_store::{MappingStore, StoreError};
use setlist_core::sort_name::SortNameGenerator;
use setlist_core::timestamp::{make_timestamped_url, parse_timestamp};
use setlist_core::transliterate::{TransliterateError, Transliterator};
use tempfile::tempdir;

/// Stand-in engine with a fixed reading table.
struct Readings;

impl Transliterator for Readings {
    fn transliterate(&self, text: &str) -> Result<String, TransliterateError> {
        match text {
            "米津玄師" => Ok("べいしんげんし".to_string()),
            "ヨルシカ" => Ok("よるしか".to_string()),
            _ => Err(TransliterateError::Failed(format!("no reading for {text}"))),
        }
    }
}

struct Row {
    artist: &'static str,
    timestamp: &'static str,
}

#[test]
fn rows_get_sort_keys_and_links() {
    let dir = tempdir().unwrap();
    let store = MappingStore::new(dir.path().join("artist_sort_mapping.tsv"));
    // The automatic reading is wrong; the override fixes it.
    store.save_mapping("米津玄師", "よねづけんし").unwrap();

    let gen = SortNameGenerator::with_engine(Box::new(Readings)).with_overrides(&store);
    let stream_url = "https://www.youtube.com/watch?v=abc123&list=PL1";
    let rows = [
        Row { artist: "米津玄師", timestamp: "1:02:03" },
        Row { artist: "ヨルシカ", timestamp: "12:34" },
        Row { artist: "Aimer", timestamp: "??" },
        Row { artist: "ずっと真夜中でいいのに。", timestamp: "" },
    ];

    let keyed: Vec<(String, String)> = rows
        .iter()
        .map(|r| (gen.generate(r.artist), make_timestamped_url(stream_url, r.timestamp)))
        .collect();

    assert_eq!(keyed[0].0, "よねづけんし");
    assert!(keyed[0].1.contains("t=3723"));
    assert!(keyed[0].1.contains("v=abc123"));
    assert!(keyed[0].1.contains("list=PL1"));

    assert_eq!(keyed[1].0, "よるしか");
    assert!(keyed[1].1.contains("t=754"));

    assert_eq!(keyed[2].0, "Aimer");
    assert_eq!(keyed[2].1, stream_url);

    assert_eq!(keyed[3].0, "ずっと真夜中でいいのに。");
    assert_eq!(keyed[3].1, stream_url);

    let mut order: Vec<&str> = keyed.iter().map(|(k, _)| k.as_str()).collect();
    order.sort();
    assert_eq!(order[0], "Aimer");
}

#[test]
fn override_edits_are_visible_without_rebuilding_generator() {
    let dir = tempdir().unwrap();
    let store = MappingStore::new(dir.path().join("map.tsv"));
    let gen = SortNameGenerator::with_engine(Box::new(Readings)).with_overrides(&store);

    assert_eq!(gen.generate("ヨルシカ"), "よるしか");
    store.save_mapping("ヨルシカ", "yorushika").unwrap();
    assert_eq!(gen.generate("ヨルシカ"), "yorushika");
    assert!(store.delete_mapping("ヨルシカ").unwrap());
    assert_eq!(gen.generate("ヨルシカ"), "よるしか");
}

#[test]
fn malformed_store_degrades_to_automatic_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.tsv");
    std::fs::write(&path, "artist\tsort_name\nbroken row without tab\n").unwrap();
    let store = MappingStore::new(&path);

    assert!(matches!(store.load(), Err(StoreError::Format { line: Some(2), .. })));
    let gen = SortNameGenerator::with_engine(Box::new(Readings)).with_overrides(&store);
    assert_eq!(gen.generate("ヨルシカ"), "よるしか");
}

#[test]
fn parse_timestamp_examples() {
    let secs = |t: &str| parse_timestamp(t).map(|s| s.as_secs());
    assert_eq!(secs("1:23:45"), Some(5025));
    assert_eq!(secs("12:34"), Some(754));
    assert_eq!(secs("01:02:03"), Some(3723));
    assert_eq!(secs("invalid"), None);
    assert_eq!(secs(""), None);
}
