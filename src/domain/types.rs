//! Shared domain types.
//!
//! These types are intentionally kept independent of the spreadsheet and CSV
//! libraries so the extraction and classification code can be tested with
//! plain in-memory values.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Item discrimination. Fixed for every item under the 1PL model.
pub const A_PARAM: f64 = 1.0;

/// Standard error placeholder until difficulty estimation exists.
pub const SE_PARAM: f64 = 0.0;

/// Max score assumed when the source does not provide one.
pub const DEFAULT_MAX_SCORE: u32 = 1;

/// CEFR proficiency band, in ascending order of difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrBand {
    #[serde(rename = "Pre-A1")]
    PreA1,
    A1,
    A2,
    #[serde(rename = "A2+")]
    A2Plus,
    B1,
    #[serde(rename = "B1+")]
    B1Plus,
    B2,
    #[serde(rename = "B2+")]
    B2Plus,
    C1,
    C2,
}

impl CefrBand {
    pub const ALL: [CefrBand; 10] = [
        CefrBand::PreA1,
        CefrBand::A1,
        CefrBand::A2,
        CefrBand::A2Plus,
        CefrBand::B1,
        CefrBand::B1Plus,
        CefrBand::B2,
        CefrBand::B2Plus,
        CefrBand::C1,
        CefrBand::C2,
    ];

    /// Label written to the output CSV.
    pub fn label(self) -> &'static str {
        match self {
            CefrBand::PreA1 => "Pre-A1",
            CefrBand::A1 => "A1",
            CefrBand::A2 => "A2",
            CefrBand::A2Plus => "A2+",
            CefrBand::B1 => "B1",
            CefrBand::B1Plus => "B1+",
            CefrBand::B2 => "B2",
            CefrBand::B2Plus => "B2+",
            CefrBand::C1 => "C1",
            CefrBand::C2 => "C2",
        }
    }
}

impl fmt::Display for CefrBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CefrBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CefrBand::ALL
            .into_iter()
            .find(|band| band.label() == s.trim())
            .ok_or_else(|| format!("Unknown CEFR band '{s}'"))
    }
}

/// One row of the output item file.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub uiid: String,
    /// Discrimination.
    pub a: f64,
    /// Difficulty.
    pub b: f64,
    /// Standard error of `b`.
    pub se: f64,
    pub rating: CefrBand,
    /// Maximum achievable score.
    pub k: u32,
}

impl ItemRecord {
    /// Build a 1PL item with the fixed discrimination and zero standard error.
    pub fn new(uiid: impl Into<String>, b: f64, rating: CefrBand, k: u32) -> Self {
        Self {
            uiid: uiid.into(),
            a: A_PARAM,
            b,
            se: SE_PARAM,
            rating,
            k,
        }
    }

    /// Right/wrong item (max score of 1).
    pub fn is_dichotomous(&self) -> bool {
        self.k == 1
    }
}

/// A raw cell value as read from the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// The column-aligned header region of one sheet or table.
///
/// Index `i` of each row describes the same item column.
#[derive(Debug, Clone, Default)]
pub struct HeaderRows {
    /// Sheet name (workbooks) or file name (CSV).
    pub source_name: String,
    /// Absolute 0-based column index of the first entry.
    pub first_column: usize,
    pub difficulty: Vec<Cell>,
    pub max_score: Vec<Cell>,
    pub uiid: Vec<Cell>,
}

impl HeaderRows {
    /// Number of item columns (the widest of the three rows).
    pub fn width(&self) -> usize {
        self.difficulty
            .len()
            .max(self.max_score.len())
            .max(self.uiid.len())
    }
}

/// What to do with an item whose difficulty cannot be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Abort the run before anything is written.
    #[default]
    Strict,
    /// Drop the item and keep going.
    Skip,
}

/// Output column set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSchema {
    /// `UIID,a,b,se,rating`
    Basic,
    /// `UIID,a,b,se,rating,k`
    #[default]
    WithMaxScore,
}

impl OutputSchema {
    pub fn header(self) -> &'static [&'static str] {
        match self {
            OutputSchema::Basic => &["UIID", "a", "b", "se", "rating"],
            OutputSchema::WithMaxScore => &["UIID", "a", "b", "se", "rating", "k"],
        }
    }
}

/// Which worksheet holds the item header region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelector {
    #[default]
    First,
    Named(String),
}

/// Options for the extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub domain_policy: DomainPolicy,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI arguments (plus compiled defaults).
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub source: crate::io::SourceOptions,
    pub extract: ExtractOptions,
    pub schema: OutputSchema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_labels_parse_back() {
        for band in CefrBand::ALL {
            assert_eq!(band.label().parse::<CefrBand>(), Ok(band));
        }
        assert_eq!("A2+".parse::<CefrBand>(), Ok(CefrBand::A2Plus));
        assert!("A3".parse::<CefrBand>().is_err());
    }

    #[test]
    fn new_item_uses_1pl_constants() {
        let item = ItemRecord::new("A1-1", -4.0, CefrBand::A1, 1);
        assert_eq!(item.a, 1.0);
        assert_eq!(item.se, 0.0);
        assert!(item.is_dichotomous());
    }
}
