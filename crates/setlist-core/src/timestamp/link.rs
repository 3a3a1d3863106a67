//! Rewrite a video URL so it starts at a catalog timestamp.

use super::parse_timestamp;

/// Query parameter carrying the start offset in seconds.
const TIME_PARAM: &str = "t";

/// Returns `base_url` with its `t` query parameter set to the seconds in
/// `timestamp`.
///
/// An existing `t` is replaced, not duplicated; every other query parameter,
/// the path, host and fragment are kept. If either input is empty, the
/// timestamp does not parse, or the URL is not absolute, `base_url` is
/// returned unchanged.
///
/// # Examples
///
/// - `make_timestamped_url("https://x/watch?v=abc", "1:02")` → `"https://x/watch?v=abc&t=62"`
/// - `make_timestamped_url("https://x/watch?v=abc", "soon")` → `"https://x/watch?v=abc"`
pub fn make_timestamped_url(base_url: &str, timestamp: &str) -> String {
    if base_url.is_empty() || timestamp.is_empty() {
        return base_url.to_string();
    }

    let Some(seconds) = parse_timestamp(timestamp) else {
        tracing::warn!(timestamp, url = base_url, "unparseable timestamp; using untimed link");
        return base_url.to_string();
    };

    let mut url = match url::Url::parse(base_url) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(url = base_url, "cannot parse URL for timestamp link: {}", e);
            return base_url.to_string();
        }
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != TIME_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(TIME_PARAM, &seconds.as_secs().to_string());

    url.to_string()
}
