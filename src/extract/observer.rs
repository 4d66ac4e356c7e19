//! Progress notifications from the extractor.
//!
//! The extractor never logs on its own; it reports what happened to an
//! [`ExtractObserver`]. The binary plugs in [`TracingObserver`], tests use
//! [`NoopObserver`] or their own recorder.

use tracing::{debug, warn};

use crate::cefr::RatingSource;
use crate::domain::ItemRecord;
use crate::error::ClassifyError;
use crate::io::range::column_letters;

/// Receives per-column events during extraction.
///
/// `column` is the absolute 0-based sheet column of the item.
pub trait ExtractObserver {
    /// `source` says whether the rating came from the identifier or the difficulty.
    fn item_extracted(&mut self, _column: usize, _item: &ItemRecord, _source: RatingSource) {}

    fn column_skipped(&mut self, _column: usize) {}

    fn difficulty_defaulted(&mut self, _column: usize, _raw: &str) {}

    fn max_score_defaulted(&mut self, _column: usize, _uiid: &str, _raw: &str) {}

    fn item_rejected(&mut self, _column: usize, _uiid: &str, _error: &ClassifyError) {}
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExtractObserver for NoopObserver {}

/// Logs events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExtractObserver for TracingObserver {
    fn item_extracted(&mut self, column: usize, item: &ItemRecord, source: RatingSource) {
        debug!(
            column = %column_letters(column),
            uiid = %item.uiid,
            b = item.b,
            rating = %item.rating,
            source = ?source,
            k = item.k,
            "item extracted"
        );
    }

    fn column_skipped(&mut self, column: usize) {
        debug!(column = %column_letters(column), "no item identifier; column skipped");
    }

    fn difficulty_defaulted(&mut self, column: usize, raw: &str) {
        warn!(column = %column_letters(column), raw, "unreadable difficulty; using 0.0");
    }

    fn max_score_defaulted(&mut self, column: usize, uiid: &str, raw: &str) {
        warn!(column = %column_letters(column), uiid, raw, "unusable max score; using 1");
    }

    fn item_rejected(&mut self, column: usize, uiid: &str, error: &ClassifyError) {
        warn!(column = %column_letters(column), uiid, "item skipped: {error}");
    }
}
