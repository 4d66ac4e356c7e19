//! Command-line parsing.
//!
//! The CLI takes one optional positional argument; everything else is a
//! compiled default (see `app::convert_config_from_args`).

use std::path::PathBuf;

use clap::Parser;

/// Input workbook used when no path is given.
pub const DEFAULT_INFILE: &str = "data/DELTdata.xlsx";

/// Where the item parameter CSV is written.
pub const DEFAULT_OUTFILE: &str = "data/items.csv";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "items",
    about = "Convert item-bank header metadata into an item parameter CSV (UIID, a, b, se, rating, k)"
)]
pub struct Cli {
    /// Input file to parse: a workbook (xlsx/xlsm/xlsb/xls/ods) or a two-row CSV.
    #[arg(value_name = "INFILE", default_value = DEFAULT_INFILE)]
    pub infile: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn infile_defaults_when_omitted() {
        let cli = Cli::try_parse_from(["items"]).unwrap();
        assert_eq!(cli.infile, PathBuf::from(DEFAULT_INFILE));

        let cli = Cli::try_parse_from(["items", "bank.csv"]).unwrap();
        assert_eq!(cli.infile, PathBuf::from("bank.csv"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["items", "--sheet", "x"]).is_err());
    }
}
