//! CEFR band classification.
//!
//! An item's band comes from one of two places:
//!
//! - its identifier, when it starts with a band code (`B2-laptop-01` is `B2`)
//! - otherwise an estimate from its difficulty via the range table (`table`)
//!
//! The identifier wins whenever it carries a recognised prefix.

use crate::domain::CefrBand;
use crate::error::ClassifyError;

pub mod table;

pub use table::{B_MAX, B_MIN, BAND_TABLE, BandInterval};

/// Band codes accepted as an identifier prefix.
const PREFIX_BANDS: [(&str, CefrBand); 6] = [
    ("A1", CefrBand::A1),
    ("A2", CefrBand::A2),
    ("B1", CefrBand::B1),
    ("B2", CefrBand::B2),
    ("C1", CefrBand::C1),
    ("C2", CefrBand::C2),
];

/// Where a rating came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSource {
    /// Taken verbatim from the identifier prefix.
    Prefix,
    /// Estimated from the difficulty.
    Estimated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub band: CefrBand,
    pub source: RatingSource,
}

/// Derive the CEFR band for an item.
pub fn classify(uiid: &str, b: f64) -> Result<CefrBand, ClassifyError> {
    rate(uiid, b).map(|rating| rating.band)
}

/// Like [`classify`], but also reports whether the band was read from the
/// identifier or estimated from `b`.
///
/// `b` is checked against the domain even when the identifier decides the
/// band, since it is written to the output alongside the rating.
pub fn rate(uiid: &str, b: f64) -> Result<Rating, ClassifyError> {
    if !table::in_domain(b) {
        return Err(ClassifyError::OutOfRange { b });
    }

    if let Some(band) = prefix_band(uiid) {
        return Ok(Rating {
            band,
            source: RatingSource::Prefix,
        });
    }

    let band = band_for_difficulty(b)?;
    Ok(Rating {
        band,
        source: RatingSource::Estimated,
    })
}

/// Estimate a band from difficulty alone.
pub fn band_for_difficulty(b: f64) -> Result<CefrBand, ClassifyError> {
    table::lookup(b).ok_or(ClassifyError::OutOfRange { b })
}

/// Band encoded in the first two characters of `uiid`, if any.
///
/// Identifiers shorter than three characters are never treated as prefixed:
/// a bare `"B1"` is an identifier, not a band annotation.
pub fn prefix_band(uiid: &str) -> Option<CefrBand> {
    if uiid.chars().count() < 3 {
        return None;
    }
    let prefix = uiid.get(..2)?;
    PREFIX_BANDS
        .iter()
        .find(|(code, _)| *code == prefix)
        .map(|(_, band)| *band)
}
