//! Structural validation of configuration documents.
//!
//! The contract is a JSON Schema (draft 7) embedded in the binary and compiled once. Documents
//! are decoded into a generic [`Value`] first, so JSON and YAML inputs share the same schema and
//! the same violation paths. Validation collects every violation instead of stopping at the
//! first one, and always runs before any domain decoding.

use crate::error::{GenerateError, Stage, Violation};
use camino::Utf8Path;
use core::cmp::Ordering;
use serde_json::Value;
use std::sync::LazyLock;

const LOG_TARGET: &str = "    schema";

/// The embedded configuration schema.
pub const METRICS_SCHEMA: &str = include_str!("metrics.schema.json");

static VALIDATOR: LazyLock<jsonschema::Validator> = LazyLock::new(|| {
    let schema: Value = serde_json::from_str(METRICS_SCHEMA).expect("embedded schema should be valid JSON");
    jsonschema::draft7::new(&schema).expect("embedded schema should compile")
});

/// The textual syntax of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// YAML for `.yaml`/`.yml` paths, JSON otherwise.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Decode raw configuration bytes into a document value.
///
/// # Errors
///
/// Returns [`GenerateError::Parse`] when the bytes are not well-formed in `format`.
pub fn parse_document(bytes: &[u8], format: InputFormat) -> Result<Value, GenerateError> {
    let result = match format {
        InputFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        InputFormat::Yaml => serde_yaml::from_slice(bytes).map_err(|e| e.to_string()),
    };

    result.map_err(|message| GenerateError::Parse {
        stage: Stage::Validate,
        message,
    })
}

/// One JSON pointer segment; array indices order numerically.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Segment<'a> {
    Index(u64),
    Key(&'a str),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(segment: &'a str) -> Self {
        segment.parse().map_or(Self::Key(segment), Self::Index)
    }
}

/// Order JSON pointers by document position, so `/metrics/2` sorts before `/metrics/10`.
fn compare_pointers(a: &str, b: &str) -> Ordering {
    a.split('/').map(Segment::from).cmp(b.split('/').map(Segment::from))
}

/// Check `document` against the embedded schema.
///
/// # Errors
///
/// Returns [`GenerateError::SchemaViolation`] with every violation, sorted by path.
pub fn validate(document: &Value) -> Result<(), GenerateError> {
    let mut violations: Vec<Violation> = VALIDATOR
        .iter_errors(document)
        .map(|error| Violation::new(error.instance_path.to_string(), error.to_string()))
        .collect();

    if violations.is_empty() {
        log::debug!(target: LOG_TARGET, "Document conforms to the schema");
        return Ok(());
    }

    violations.sort_by(|a, b| compare_pointers(&a.path, &b.path).then_with(|| a.message.cmp(&b.message)));
    violations.dedup();

    log::debug!(target: LOG_TARGET, "Document has {} schema violation(s)", violations.len());
    Err(GenerateError::SchemaViolation(violations))
}
