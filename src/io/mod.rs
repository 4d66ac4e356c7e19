//! Input/output helpers.
//!
//! - workbook/CSV header-region reader (`source`)
//! - A1 range parsing (`range`)
//! - item parameter CSV read/write (`items`)

pub mod items;
pub mod range;
pub mod source;

pub use items::*;
pub use range::HeaderRange;
pub use source::*;
