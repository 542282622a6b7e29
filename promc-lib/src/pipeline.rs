//! The end-to-end generation pipeline.
//!
//! Stages run strictly in order and the first failure aborts the run:
//! read → parse → validate → load → render → format. Nothing here writes to the destination;
//! formatting and persisting are left to [`crate::emit`] so that check mode and generation share
//! the exact same text.

use crate::codegen::render;
use crate::emit::format_source;
use crate::error::{GenerateError, Stage};
use crate::model::Configuration;
use crate::schema::{InputFormat, parse_document, validate};
use camino::Utf8Path;
use std::fs;

const LOG_TARGET: &str = "  pipeline";

/// Read a configuration file and determine its syntax from the file name.
///
/// # Errors
///
/// Returns [`GenerateError::InputAccess`] if the file cannot be read.
pub fn read_config(path: &Utf8Path) -> Result<(Vec<u8>, InputFormat), GenerateError> {
    let bytes = fs::read(path).map_err(|source| GenerateError::InputAccess {
        stage: Stage::Read,
        path: path.to_path_buf(),
        source,
    })?;

    let format = InputFormat::from_path(path);
    log::info!(target: LOG_TARGET, "Read {} bytes of {format:?} from '{path}'", bytes.len());
    Ok((bytes, format))
}

/// Parse, validate and load raw configuration bytes.
///
/// # Errors
///
/// Returns the first stage error: [`GenerateError::Parse`] or [`GenerateError::SchemaViolation`].
pub fn load_config(bytes: &[u8], format: InputFormat, package_name: &str) -> Result<Configuration, GenerateError> {
    let document = parse_document(bytes, format)?;
    validate(&document)?;
    Configuration::load(document, package_name)
}

/// Turn raw configuration bytes into unformatted Rust source.
///
/// # Errors
///
/// Returns the first stage error encountered.
pub fn render_config(bytes: &[u8], format: InputFormat, package_name: &str) -> Result<String, GenerateError> {
    let config = load_config(bytes, format, package_name)?;
    let text = render(&config)?;

    log::debug!(
        target: LOG_TARGET,
        "Rendered {} metric(s) using {} distinct label(s)",
        config.metrics.len(),
        config.unique_labels.len()
    );
    Ok(text)
}

/// Turn raw configuration bytes into formatted Rust source.
///
/// Identical input always yields byte-identical output.
///
/// # Errors
///
/// Returns the first stage error encountered.
pub fn compile(bytes: &[u8], format: InputFormat, package_name: &str) -> Result<String, GenerateError> {
    format_source(&render_config(bytes, format, package_name)?)
}
