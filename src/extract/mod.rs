//! Item extraction from a header region.
//!
//! Turns the column-aligned `difficulty / max score / identifier` rows into an
//! ordered list of `ItemRecord`s:
//!
//! - columns without an identifier are skipped, not errors
//! - missing difficulty defaults to `0.0`, missing max score to `1`
//! - the CEFR band comes from `cefr::rate`
//! - output order is column order

use crate::cefr;
use crate::domain::{Cell, DEFAULT_MAX_SCORE, DomainPolicy, ExtractOptions, HeaderRows, ItemRecord};
use crate::error::{AppError, ClassifyError, EXIT_DOMAIN};
use crate::io::range::column_letters;

pub mod observer;

pub use observer::{ExtractObserver, NoopObserver, TracingObserver};

/// An item dropped under `DomainPolicy::Skip`.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedItem {
    /// Absolute 0-based sheet column.
    pub column: usize,
    pub uiid: String,
    pub b: f64,
    pub error: ClassifyError,
}

/// Extraction output: items in column order + bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub source_name: String,
    pub items: Vec<ItemRecord>,
    /// Columns up to and including the last one with an identifier. Empty
    /// trailing columns of the header range are not counted.
    pub columns_read: usize,
    pub columns_skipped: usize,
    pub rejected: Vec<RejectedItem>,
}

/// Build item records from a header region.
pub fn extract(
    rows: &HeaderRows,
    options: &ExtractOptions,
    observer: &mut dyn ExtractObserver,
) -> Result<Extraction, AppError> {
    let width = used_width(rows);
    let mut out = Extraction {
        source_name: rows.source_name.clone(),
        items: Vec::with_capacity(width),
        columns_read: width,
        ..Extraction::default()
    };

    for idx in 0..width {
        let column = rows.first_column + idx;

        let Some(uiid) = cell_at(&rows.uiid, idx).and_then(uiid_value) else {
            out.columns_skipped += 1;
            observer.column_skipped(column);
            continue;
        };

        let b = match difficulty_value(cell_at(&rows.difficulty, idx)) {
            Ok(b) => b,
            Err(raw) => {
                observer.difficulty_defaulted(column, &raw);
                0.0
            }
        };

        let k = match max_score_value(cell_at(&rows.max_score, idx)) {
            Ok(k) => k,
            Err(raw) => {
                observer.max_score_defaulted(column, &uiid, &raw);
                DEFAULT_MAX_SCORE
            }
        };

        let rating = match cefr::rate(&uiid, b) {
            Ok(rating) => rating,
            Err(error) => match options.domain_policy {
                DomainPolicy::Strict => {
                    return Err(AppError::new(
                        EXIT_DOMAIN,
                        format!(
                            "Item '{uiid}' in column {} of '{}': {error}",
                            column_letters(column),
                            rows.source_name
                        ),
                    ));
                }
                DomainPolicy::Skip => {
                    observer.item_rejected(column, &uiid, &error);
                    out.rejected.push(RejectedItem { column, uiid, b, error });
                    continue;
                }
            },
        };

        let item = ItemRecord::new(uiid, b, rating.band, k);
        observer.item_extracted(column, &item, rating.source);
        out.items.push(item);
    }

    Ok(out)
}

/// Columns up to the last non-blank identifier.
fn used_width(rows: &HeaderRows) -> usize {
    rows.uiid.iter().rposition(|cell| !cell.is_empty()).map_or(0, |idx| idx + 1)
}

fn cell_at(row: &[Cell], idx: usize) -> Option<&Cell> {
    row.get(idx)
}

/// Identifier text, or `None` when the cell is absent/blank.
fn uiid_value(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Empty => None,
        Cell::Text(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Cell::Number(v) => Some(format_number(*v)),
    }
}

/// Difficulty; missing cells read as `0.0`. `Err` carries unparseable text.
fn difficulty_value(cell: Option<&Cell>) -> Result<f64, String> {
    match cell {
        None | Some(Cell::Empty) => Ok(0.0),
        Some(Cell::Number(v)) => Ok(*v),
        Some(Cell::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0.0);
            }
            s.parse::<f64>().map_err(|_| s.to_string())
        }
    }
}

/// Max score; missing cells read as `1`. `Err` carries values that are not a
/// positive integer.
fn max_score_value(cell: Option<&Cell>) -> Result<u32, String> {
    let v = match cell {
        None | Some(Cell::Empty) => return Ok(DEFAULT_MAX_SCORE),
        Some(Cell::Number(v)) => *v,
        Some(Cell::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(DEFAULT_MAX_SCORE);
            }
            s.parse::<f64>().map_err(|_| s.to_string())?
        }
    };

    if v.is_finite() && v.fract() == 0.0 && v >= 1.0 && v <= f64::from(u32::MAX) {
        Ok(v as u32)
    } else {
        Err(format_number(v))
    }
}

/// Render a numeric cell the way a spreadsheet shows it (`101`, not `101.0`).
fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
