//! Difficulty-to-band range table.
//!
//! Adjacent intervals share their endpoint. Lookups scan in declared order and
//! take the first match, so a shared boundary belongs to the lower band
//! (e.g. `b = -3.7` is `A1`, not `A2`).

use crate::domain::CefrBand;

/// Smallest classifiable difficulty.
pub const B_MIN: f64 = -9.999;
/// Largest classifiable difficulty.
pub const B_MAX: f64 = 9.999;

/// One row of the band table: `lo <= b <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandInterval {
    pub band: CefrBand,
    pub lo: f64,
    pub hi: f64,
}

impl BandInterval {
    pub fn contains(&self, b: f64) -> bool {
        self.lo <= b && b <= self.hi
    }
}

const fn interval(band: CefrBand, lo: f64, hi: f64) -> BandInterval {
    BandInterval { band, lo, hi }
}

pub const BAND_TABLE: [BandInterval; 10] = [
    interval(CefrBand::PreA1, B_MIN, -5.000),
    interval(CefrBand::A1, -5.000, -3.700),
    interval(CefrBand::A2, -3.700, -2.500),
    interval(CefrBand::A2Plus, -2.500, -1.650),
    interval(CefrBand::B1, -1.650, -0.450),
    interval(CefrBand::B1Plus, -0.450, 0.200),
    interval(CefrBand::B2, 0.200, 1.000),
    interval(CefrBand::B2Plus, 1.000, 2.000),
    interval(CefrBand::C1, 2.000, 3.200),
    interval(CefrBand::C2, 3.200, B_MAX),
];

/// Whether `b` lies in the classifiable domain.
pub fn in_domain(b: f64) -> bool {
    (B_MIN..=B_MAX).contains(&b)
}

/// Interval of a band in the table.
pub fn interval_of(band: CefrBand) -> Option<BandInterval> {
    BAND_TABLE.iter().copied().find(|row| row.band == band)
}

/// First band in table order whose interval contains `b`.
///
/// Returns `None` outside `[B_MIN, B_MAX]` (including NaN).
pub fn lookup(b: f64) -> Option<CefrBand> {
    BAND_TABLE.iter().find(|row| row.contains(b)).map(|row| row.band)
}
