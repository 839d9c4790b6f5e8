mod attr;
#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::model::FieldRecord;

pub use self::attr::{MarkerArgs, normalize_type, parse_marker_args};

use self::attr::{is_field_decl, parse_field_decl};

/// Opening token of a field annotation marker.
const MARKER_OPEN: &str = "#[cwr(";
/// Token sequence that syntactically closes a marker.
const MARKER_CLOSE: &str = ")]";
/// How many lines after a marker may hold its field declaration.
const LOOKAHEAD_LINES: usize = 4;

/// Default `start` when the marker carries none.
const DEFAULT_START: u32 = 0;
/// Default minimum CWR version when the marker carries none.
const DEFAULT_VERSION: &str = "2.0";

/// Extract every annotated field of one source file.
///
/// Pure function of the file text: the record type comes from the first
/// `pub struct <Name>Record` declaration (no match means the whole file
/// yields nothing), and each `#[cwr(...)]` marker is associated with the
/// first field declaration within a bounded lookahead window. Duplicate
/// (RecordType, Field, StartIndex) triples within one file are suppressed;
/// the dedup set is scoped to this call, never shared across files.
pub fn extract_fields(content: &str) -> Vec<FieldRecord> {
    let Some(record_type) = record_type_name(content) else {
        return Vec::new();
    };

    let lines: Vec<&str> = content.lines().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].trim().starts_with(MARKER_OPEN) {
            i += 1;
            continue;
        }

        // Join a marker that wraps across physical lines into one logical
        // string. An unterminated marker extends to end of file; the
        // lookahead below then finds nothing and the marker is dropped.
        let mut marker = lines[i].trim().to_string();
        while !marker.ends_with(MARKER_CLOSE) && i + 1 < lines.len() {
            i += 1;
            marker.push(' ');
            marker.push_str(lines[i].trim());
        }

        let args = parse_marker_args(&marker);

        // First declaration-shaped line within the window wins, even when a
        // later line in the window would also match.
        let window_end = (i + 1 + LOOKAHEAD_LINES).min(lines.len());
        let decl_at = (i + 1..window_end).find(|&j| is_field_decl(lines[j].trim()));

        let Some(j) = decl_at else {
            i += 1;
            continue;
        };

        if let Some((field, raw_type)) = parse_field_decl(lines[j].trim()) {
            let start = args.start.unwrap_or(DEFAULT_START);
            let key = format!("{record_type}:{field}:{start}");
            if seen.insert(key) {
                records.push(FieldRecord {
                    record_type: record_type.clone(),
                    field,
                    start_index: start,
                    data_type: normalize_type(&raw_type),
                    cwr_version: args
                        .min_version
                        .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
                });
            }
        }

        // Resume after the consumed declaration line.
        i = j + 1;
    }

    records
}

/// Resolve the record type of a file: the first `pub struct <Name>Record`
/// declaration, with the `Record` suffix stripped and the name uppercased.
pub fn record_type_name(content: &str) -> Option<String> {
    for line in content.lines() {
        let Some(at) = line.find("pub struct ") else {
            continue;
        };
        let rest = &line[at + "pub struct ".len()..];
        let name: &str = rest
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()
            .unwrap_or("");
        if let Some(stem) = name.strip_suffix("Record") {
            if !stem.is_empty() {
                return Some(stem.to_uppercase());
            }
        }
    }
    None
}
