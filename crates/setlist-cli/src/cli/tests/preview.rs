//! Tests for sort-key and link.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_sort_key() {
    match parse(&["setlist", "sort-key", "ヨルシカ"]).command {
        CliCommand::SortKey { name } => assert_eq!(name, "ヨルシカ"),
        _ => panic!("expected SortKey"),
    }
}

#[test]
fn cli_parse_link() {
    match parse(&["setlist", "link", "https://youtu.be/abc", "1:02:03"]).command {
        CliCommand::Link { url, timestamp } => {
            assert_eq!(url, "https://youtu.be/abc");
            assert_eq!(timestamp, "1:02:03");
        }
        _ => panic!("expected Link"),
    }
}
