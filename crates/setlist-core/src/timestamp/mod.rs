//! Timestamp parsing and timestamped video links.
//!
//! Catalog timestamps are transcribed by hand, so both `H:MM:SS` and `M:SS`
//! shapes are accepted, with or without leading zeros. Anything else parses
//! to `None`; callers fall back to the untimed link instead of failing the row.

mod link;

use std::fmt;

pub use link::make_timestamped_url;

/// Whole seconds from the start of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampSeconds(u32);

impl TimestampSeconds {
    pub fn as_secs(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimestampSeconds {
    /// `H:MM:SS` when the offset reaches an hour, `M:SS` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        if hours > 0 {
            write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            write!(f, "{}:{:02}", minutes, seconds)
        }
    }
}

/// Parses `H:MM:SS` / `HH:MM:SS` or `M:SS` / `MM:SS` into seconds.
///
/// Each group is one or two ASCII digits. Minutes and seconds are not range
/// checked, so `"99:99:99"` is accepted. Surrounding whitespace is ignored.
pub fn parse_timestamp(text: &str) -> Option<TimestampSeconds> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut groups = [0u32; 3];
    let mut count = 0;
    for part in text.split(':') {
        if count == groups.len() {
            return None;
        }
        groups[count] = parse_group(part)?;
        count += 1;
    }

    let seconds = match count {
        3 => groups[0] * 3600 + groups[1] * 60 + groups[2],
        2 => groups[0] * 60 + groups[1],
        _ => return None,
    };
    Some(TimestampSeconds(seconds))
}

fn parse_group(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
