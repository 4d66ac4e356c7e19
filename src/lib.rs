//! `cefr-items` library crate.
//!
//! Converts the item header region of an item-bank workbook (or a two-row CSV
//! export) into an item parameter CSV with a CEFR band per item.
//!
//! The binary (`items`) is a thin wrapper around this library so that:
//!
//! - classification and extraction are testable without spawning processes
//! - the pipeline can be reused with a different observer or configuration

pub mod app;
pub mod cefr;
pub mod cli;
pub mod domain;
pub mod error;
pub mod extract;
pub mod io;
pub mod logging;
pub mod report;
