//! Error types.
//!
//! Every pipeline step reports failures as an [`AppError`], which carries the
//! process exit code alongside a human-readable message. The binary prints the
//! message and exits with that code.

use thiserror::Error;

/// Exit code for an input path that does not resolve to a file.
pub const EXIT_INPUT_NOT_FOUND: u8 = 1;
/// Exit code for read/write failures (unreadable workbook, missing sheet, CSV errors).
pub const EXIT_IO: u8 = 2;
/// Exit code for a difficulty outside the classifiable domain.
pub const EXIT_DOMAIN: u8 = 3;

#[derive(Clone, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

/// Failure to derive a CEFR band for an item.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClassifyError {
    #[error("difficulty {b} is outside the classifiable range [-9.999, 9.999]")]
    OutOfRange { b: f64 },
}
