//! Reporting utilities: band distribution and the run summary.

use crate::domain::{CefrBand, ItemRecord};

pub mod format;

pub use format::*;

/// Item count per band, in band order. Bands with no items are omitted.
pub fn band_counts(items: &[ItemRecord]) -> Vec<(CefrBand, usize)> {
    CefrBand::ALL
        .into_iter()
        .map(|band| (band, items.iter().filter(|i| i.rating == band).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}
