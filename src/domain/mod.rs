//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the output record (`ItemRecord`) and its band label (`CefrBand`)
//! - raw source values (`Cell`, `HeaderRows`)
//! - run configuration (`ConvertConfig` and its policy enums)

pub mod types;

pub use types::*;
