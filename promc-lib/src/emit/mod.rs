//! Canonical formatting and persistence of generated source.
//!
//! Formatting always happens before the destination is touched, and writes go through a
//! temporary file that is renamed into place, so a failed run never leaves a malformed or
//! half-written file behind.

mod format;
mod persist;

use crate::error::GenerateError;
use camino::Utf8Path;

pub use format::format_source;
pub use persist::{check_current, write_atomic};

/// What to do with the formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Replace the destination.
    Write,

    /// Compare against the destination without modifying it.
    Check,
}

/// Format `rendered` and deliver it to `path` according to `mode`.
///
/// `path` is only touched once formatting has succeeded.
///
/// # Errors
///
/// Returns [`GenerateError::Formatting`] for invalid source, otherwise the errors of
/// [`write_atomic`] or [`check_current`].
pub fn emit(path: &Utf8Path, rendered: &str, mode: EmitMode) -> Result<(), GenerateError> {
    let formatted = format_source(rendered)?;

    match mode {
        EmitMode::Write => write_atomic(path, &formatted),
        EmitMode::Check => check_current(path, &formatted),
    }
}
