//! Source reader: load the item header region from a workbook or CSV file.
//!
//! Two layouts are supported:
//!
//! - **Workbook** (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`): one sheet whose
//!   header range (default `D1:DX3`) holds difficulty, max score and identifier
//!   rows, one item per column.
//! - **CSV** (`.csv`): row 0 identifiers, row 1 difficulties, column 0 reserved.
//!   There is no max-score row.
//!
//! The reader does no interpretation beyond turning library values into
//! [`Cell`]s; defaulting and classification happen in `extract`.

use std::fs::File;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::debug;

use crate::domain::{Cell, HeaderRows, SheetSelector};
use crate::error::{AppError, EXIT_INPUT_NOT_FOUND, EXIT_IO};
use crate::io::range::HeaderRange;

/// Options for locating the header region.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub sheet: SheetSelector,
    /// Workbook range holding the three header rows. Ignored for CSV input.
    pub header_range: HeaderRange,
}

/// Input layout, resolved from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::Workbook,
        }
    }
}

/// Row offsets inside the workbook header range.
const ROW_DIFFICULTY: u32 = 0;
const ROW_MAX_SCORE: u32 = 1;
const ROW_UIID: u32 = 2;

/// Read the header rows for one sheet/table.
pub fn read_header_rows(path: &Path, options: &SourceOptions) -> Result<HeaderRows, AppError> {
    if !path.is_file() {
        return Err(AppError::new(
            EXIT_INPUT_NOT_FOUND,
            format!("Input file not found: '{}'", path.display()),
        ));
    }

    match SourceFormat::from_path(path) {
        SourceFormat::Workbook => read_workbook(path, options),
        SourceFormat::Csv => read_csv(path),
    }
}

fn read_workbook(path: &Path, options: &SourceOptions) -> Result<HeaderRows, AppError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to open workbook '{}': {e}", path.display())))?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match &options.sheet {
        SheetSelector::First => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| AppError::new(EXIT_IO, format!("Workbook '{}' has no sheets", path.display())))?,
        SheetSelector::Named(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(AppError::new(
                    EXIT_IO,
                    format!(
                        "Sheet '{name}' not found in '{}' (available: {})",
                        path.display(),
                        sheet_names.join(", ")
                    ),
                ));
            }
            name.clone()
        }
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to read sheet '{sheet_name}': {e}")))?;

    debug!(sheet = %sheet_name, range = %options.header_range, "reading header region");

    let region = options.header_range;
    let row = |offset: u32| -> Vec<Cell> {
        let r = region.first_row + offset;
        if r > region.last_row {
            return Vec::new();
        }
        (region.first_col..=region.last_col)
            .map(|c| cell_at(&range, r, c))
            .collect()
    };

    Ok(HeaderRows {
        source_name: sheet_name.clone(),
        first_column: region.first_col as usize,
        difficulty: row(ROW_DIFFICULTY),
        max_score: row(ROW_MAX_SCORE),
        uiid: row(ROW_UIID),
    })
}

/// Cells outside the sheet's used area read as empty.
fn cell_at(range: &Range<Data>, row: u32, col: u32) -> Cell {
    range.get_value((row, col)).map(cell_from_data).unwrap_or_default()
}

/// Error cells (`#DIV/0!`, `#N/A`) keep their error text, so a broken
/// difficulty is reported as unreadable instead of passing as missing.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Error(e) => Cell::Text(e.to_string()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Float(v) => Cell::Number(*v),
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Bool(v) => Cell::Text(v.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
    }
}

fn read_csv(path: &Path) -> Result<HeaderRows, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = reader.records().take(2);
    let mut next_row = || -> Result<Vec<Cell>, AppError> {
        match records.next() {
            None => Ok(Vec::new()),
            Some(Err(e)) => Err(AppError::new(EXIT_IO, format!("Failed to read CSV '{}': {e}", path.display()))),
            // Column 0 is reserved for row labels.
            Some(Ok(record)) => Ok(record.iter().skip(1).map(csv_cell).collect()),
        }
    };

    let uiid = next_row()?;
    let difficulty = next_row()?;

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(HeaderRows {
        source_name,
        first_column: 1,
        difficulty,
        max_score: Vec::new(),
        uiid,
    })
}

fn csv_cell(field: &str) -> Cell {
    if field.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(field.to_string())
    }
}
