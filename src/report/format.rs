//! Formatted terminal output.
//!
//! Formatting lives here so the pipeline stays free of presentation details.

use std::path::Path;

use crate::extract::Extraction;
use crate::io::range::column_letters;
use crate::report::band_counts;

/// Format the run summary: source, item count, destination, skips and bands.
pub fn format_run_summary(extraction: &Extraction, output_path: &Path) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} containing {} items converted into: {}\n",
        extraction.source_name,
        extraction.items.len(),
        output_path.display()
    ));
    out.push_str(&format!(
        "Columns: read={} | skipped (no identifier)={} | rejected={}\n",
        extraction.columns_read,
        extraction.columns_skipped,
        extraction.rejected.len()
    ));

    for rejected in &extraction.rejected {
        out.push_str(&format!(
            "  rejected {} (column {}): {}\n",
            rejected.uiid,
            column_letters(rejected.column),
            rejected.error
        ));
    }

    let counts = band_counts(&extraction.items);
    if !counts.is_empty() {
        let bands = counts
            .iter()
            .map(|(band, n)| format!("{band}={n}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("Bands: {bands}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CefrBand, ItemRecord};
    use crate::error::ClassifyError;
    use crate::extract::RejectedItem;

    #[test]
    fn summary_lists_counts_and_rejections() {
        let extraction = Extraction {
            source_name: "Sheet1".to_string(),
            items: vec![
                ItemRecord::new("A1-1", -4.0, CefrBand::A1, 1),
                ItemRecord::new("B1-2", -1.0, CefrBand::B1, 2),
            ],
            columns_read: 4,
            columns_skipped: 1,
            rejected: vec![RejectedItem {
                column: 6,
                uiid: "bad".to_string(),
                b: 11.0,
                error: ClassifyError::OutOfRange { b: 11.0 },
            }],
        };

        let text = format_run_summary(&extraction, Path::new("data/items.csv"));
        assert!(text.starts_with("Sheet1 containing 2 items converted into: data/items.csv\n"));
        assert!(text.contains("read=4 | skipped (no identifier)=1 | rejected=1"));
        assert!(text.contains("rejected bad (column G)"));
        assert!(text.contains("Bands: A1=1 B1=1"));
    }
}
