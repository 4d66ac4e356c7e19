//! The conversion pipeline: source reader -> item extractor -> CSV writer.
//!
//! Kept separate from `app` so it can run with any observer and be tested
//! without going through argument parsing.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::ConvertConfig;
use crate::error::AppError;
use crate::extract::{ExtractObserver, Extraction, extract};
use crate::io::{read_header_rows, write_items_csv};

/// Everything a single run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub extraction: Extraction,
    pub output_path: PathBuf,
}

/// Execute one conversion.
///
/// Nothing is written unless the input was loaded and every item classified
/// (or was skipped under `DomainPolicy::Skip`). A loaded source with no items
/// still produces a header-only file.
pub fn run_conversion(config: &ConvertConfig, observer: &mut dyn ExtractObserver) -> Result<RunOutput, AppError> {
    // 1) Load the header region.
    info!("Loading data from local storage: {}", config.input_path.display());
    let rows = read_header_rows(&config.input_path, &config.source)?;

    // 2) Build item records.
    let extraction = extract(&rows, &config.extract, observer)?;
    if extraction.items.is_empty() {
        warn!(
            "No items found in {} from {}",
            extraction.source_name,
            config.input_path.display()
        );
    }

    // 3) Write the item file.
    write_items_csv(&config.output_path, &extraction.items, config.schema)?;

    Ok(RunOutput {
        extraction,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CefrBand, DomainPolicy, ExtractOptions, OutputSchema};
    use crate::error::{EXIT_DOMAIN, EXIT_INPUT_NOT_FOUND};
    use crate::extract::NoopObserver;
    use crate::io::{SourceOptions, read_items_csv};
    use std::path::Path;

    fn config(input: &Path, output: &Path) -> ConvertConfig {
        ConvertConfig {
            input_path: input.to_path_buf(),
            output_path: output.to_path_buf(),
            source: SourceOptions::default(),
            extract: ExtractOptions::default(),
            schema: OutputSchema::WithMaxScore,
        }
    }

    #[test]
    fn converts_csv_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bank.csv");
        let output = dir.path().join("data").join("items.csv");
        std::fs::write(&input, "uiid,A1-1,,B1-2,item-4\nb,-4.0,-1.0,-1.0,5.0\n").unwrap();

        let run = run_conversion(&config(&input, &output), &mut NoopObserver).unwrap();
        assert_eq!(run.extraction.items.len(), 3);
        assert_eq!(run.extraction.columns_skipped, 1);

        let back = read_items_csv(&output).unwrap();
        let summary: Vec<(&str, CefrBand, u32)> = back.iter().map(|i| (i.uiid.as_str(), i.rating, i.k)).collect();
        assert_eq!(
            summary,
            vec![("A1-1", CefrBand::A1, 1), ("B1-2", CefrBand::B1, 1), ("item-4", CefrBand::C2, 1)]
        );
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("items.csv");
        let err = run_conversion(&config(&dir.path().join("missing.xlsx"), &output), &mut NoopObserver).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT_NOT_FOUND);
        assert!(!output.exists());
    }

    #[test]
    fn existing_output_is_untouched_on_domain_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bank.csv");
        let output = dir.path().join("items.csv");
        std::fs::write(&input, "uiid,ok-1,bad-1\nb,0.5,42\n").unwrap();
        std::fs::write(&output, "previous run\n").unwrap();

        let err = run_conversion(&config(&input, &output), &mut NoopObserver).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_DOMAIN);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous run\n");
    }

    #[test]
    fn skip_policy_writes_remaining_items() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bank.csv");
        let output = dir.path().join("items.csv");
        std::fs::write(&input, "uiid,ok-1,bad-1\nb,0.5,42\n").unwrap();

        let mut cfg = config(&input, &output);
        cfg.extract.domain_policy = DomainPolicy::Skip;
        let run = run_conversion(&cfg, &mut NoopObserver).unwrap();
        assert_eq!(run.extraction.rejected.len(), 1);
        assert_eq!(read_items_csv(&output).unwrap().len(), 1);
    }

    #[test]
    fn empty_result_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bank.csv");
        let output = dir.path().join("items.csv");
        std::fs::write(&input, "uiid,,\nb,1.0,2.0\n").unwrap();

        let run = run_conversion(&config(&input, &output), &mut NoopObserver).unwrap();
        assert!(run.extraction.items.is_empty());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "UIID,a,b,se,rating,k\n");
    }
}
