//! `setlist link <url> <timestamp>` – print a timestamped stream link.

use setlist_core::timestamp::{make_timestamped_url, parse_timestamp};

pub fn run_link(url: &str, timestamp: &str) {
    if parse_timestamp(timestamp).is_none() {
        tracing::warn!(timestamp, "timestamp not recognized; printing URL unchanged");
    }
    println!("{}", make_timestamped_url(url, timestamp));
}
