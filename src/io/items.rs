//! Item parameter CSV (`UIID,a,b,se,rating[,k]`).
//!
//! This is the file downstream scoring/assembly tools consume. Floats are
//! written in their shortest round-trip form with a decimal point kept
//! (`1.0`, `-4.0`), so re-reading yields exactly the written values.

use std::fs::{File, create_dir_all};
use std::path::Path;

use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::domain::{CefrBand, DEFAULT_MAX_SCORE, ItemRecord, OutputSchema};
use crate::error::{AppError, EXIT_IO};

/// Write items to `path`, replacing any existing file.
///
/// Missing parent directories are created. Rows go to a temp file next to
/// `path`, which is renamed over it only once everything is flushed; on any
/// failure the previous file (if any) is left as it was and the temp file is
/// removed.
pub fn write_items_csv(path: &Path, items: &[ItemRecord], schema: OutputSchema) -> Result<(), AppError> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            create_dir_all(parent).map_err(|e| {
                AppError::new(EXIT_IO, format!("Failed to create output directory '{}': {e}", parent.display()))
            })?;
            parent
        }
        None => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(parent).map_err(|e| {
        AppError::new(EXIT_IO, format!("Failed to create temp file in '{}': {e}", parent.display()))
    })?;
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(tmp);

    writer
        .write_record(schema.header())
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write items CSV header: {e}")))?;

    for item in items {
        writer
            .write_record(item_fields(item, schema))
            .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write item '{}': {e}", item.uiid)))?;
    }

    let tmp = writer
        .into_inner()
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to flush items CSV '{}': {}", path.display(), e.error())))?;
    tmp.persist(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to replace items CSV '{}': {}", path.display(), e.error)))?;

    Ok(())
}

fn item_fields(item: &ItemRecord, schema: OutputSchema) -> Vec<String> {
    let mut fields = vec![
        item.uiid.clone(),
        format_float(item.a),
        format_float(item.b),
        format_float(item.se),
        item.rating.label().to_string(),
    ];
    if schema == OutputSchema::WithMaxScore {
        fields.push(item.k.to_string());
    }
    fields
}

/// Shortest representation that parses back to the same value, e.g. `-4.0`.
fn format_float(v: f64) -> String {
    format!("{v:?}")
}

#[derive(Debug, Deserialize)]
struct ItemRow {
    #[serde(rename = "UIID")]
    uiid: String,
    a: f64,
    b: f64,
    se: f64,
    rating: CefrBand,
    #[serde(default)]
    k: Option<u32>,
}

/// Read an items CSV written by [`write_items_csv`] (either schema).
pub fn read_items_csv(path: &Path) -> Result<Vec<ItemRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to open items CSV '{}': {e}", path.display())))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut items = Vec::new();
    for (idx, result) in reader.deserialize::<ItemRow>().enumerate() {
        // +2: 1-based, after the header line.
        let line = idx + 2;
        let row = result.map_err(|e| AppError::new(EXIT_IO, format!("Invalid items CSV row {line}: {e}")))?;
        items.push(ItemRecord {
            uiid: row.uiid,
            a: row.a,
            b: row.b,
            se: row.se,
            rating: row.rating,
            k: row.k.unwrap_or(DEFAULT_MAX_SCORE),
        });
    }

    Ok(items)
}
