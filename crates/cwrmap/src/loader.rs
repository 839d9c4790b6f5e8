use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::model::FieldRecord;
use crate::scan::extract_fields;

/// Enumerate the record source files of `dir`: `*.<ext>`, sorted, minus the
/// excluded registry file (its `mod.rs` holds no field declarations).
pub fn record_files(dir: &Path, ext: &str, exclude: &str) -> anyhow::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("records directory not found: {}", dir.display());
    }

    let pattern = dir.join(format!("*.{ext}"));
    let pattern_str = pattern.to_string_lossy();

    let mut entries: Vec<PathBuf> = glob::glob(&pattern_str)
        .with_context(|| format!("bad glob pattern: {pattern_str}"))?
        .filter_map(|e| e.ok())
        .filter(|p| p.file_name().and_then(|n| n.to_str()) != Some(exclude))
        .collect();
    entries.sort();

    Ok(entries)
}

/// Scan every record file of a directory and concatenate the extracted
/// fields, in sorted file order. Each file gets its own dedup scope inside
/// [`extract_fields`]; identical triples in two different files are both
/// retained on purpose.
pub fn scan_dir(dir: &Path, ext: &str, exclude: &str) -> anyhow::Result<Vec<FieldRecord>> {
    let mut records = Vec::new();

    for path in record_files(dir, ext, exclude)? {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading record file: {}", path.display()))?;
        let fields = extract_fields(&content);
        tracing::debug!(file = %path.display(), fields = fields.len(), "scanned record file");
        records.extend(fields);
    }

    Ok(records)
}
