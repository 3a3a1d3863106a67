//! On-disk TSV layout: a header line, then `<artist>\t<sort_name>` rows.

use super::error::StoreError;
use super::MappingTable;

/// Label the first non-blank line must start with.
pub const HEADER_LABEL: &str = "artist";

/// Header line written on every save.
pub const HEADER_LINE: &str = "artist\tsort_name";

const BOM: char = '\u{feff}';

/// Parses file contents into a table. Blank lines are skipped; a later row
/// for the same artist replaces an earlier one.
pub(crate) fn parse_table(text: &str) -> Result<MappingTable, StoreError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut table = MappingTable::new();
    let mut seen_header = false;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        if !seen_header {
            if !line.trim_start().starts_with(HEADER_LABEL) {
                return Err(StoreError::format(
                    Some(line_no),
                    format!("missing header; expected a line starting with {:?}", HEADER_LABEL),
                ));
            }
            seen_header = true;
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(StoreError::format(
                Some(line_no),
                format!("expected 2 tab-separated fields, found {}", fields.len()),
            ));
        }

        let artist = fields[0].trim();
        let sort_name = fields[1].trim();
        if artist.is_empty() || sort_name.is_empty() {
            return Err(StoreError::format(Some(line_no), "artist and sort name must not be blank"));
        }
        table.insert(artist.to_string(), sort_name.to_string());
    }

    Ok(table)
}

/// Renders a full snapshot: header plus one row per entry, sorted by artist.
pub(crate) fn render_table(table: &MappingTable) -> String {
    let mut out = String::with_capacity(HEADER_LINE.len() + 1 + table.len() * 32);
    out.push_str(HEADER_LINE);
    out.push('\n');
    for (artist, sort_name) in table {
        out.push_str(artist);
        out.push('\t');
        out.push_str(sort_name);
        out.push('\n');
    }
    out
}
