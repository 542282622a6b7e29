//! Error taxonomy for the generation pipeline.

use camino::Utf8PathBuf;
use core::fmt;
use std::io;
use strum::Display;

/// The pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Read,
    Validate,
    Load,
    Generate,
    Format,
    Emit,
}

/// A single problem found in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending value; empty for the document itself.
    pub path: String,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "document: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Everything that can abort a generation run.
#[derive(Debug)]
pub enum GenerateError {
    /// The configuration could not be read, or the output could not be written.
    InputAccess { stage: Stage, path: Utf8PathBuf, source: io::Error },

    /// The configuration broke one or more schema or semantic rules.
    SchemaViolation(Vec<Violation>),

    /// The document is not well-formed, or could not be decoded after validation.
    Parse { stage: Stage, message: String },

    /// The renderer met a state that validation should have excluded.
    GenerationFault(String),

    /// The rendered text is not valid Rust.
    Formatting { message: String, line: usize, column: usize, snippet: String },

    /// Check mode found an output that differs from what would be generated.
    Stale(Utf8PathBuf),
}

impl GenerateError {
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::InputAccess { stage, .. } | Self::Parse { stage, .. } => *stage,
            Self::SchemaViolation(_) => Stage::Validate,
            Self::GenerationFault(_) => Stage::Generate,
            Self::Formatting { .. } => Stage::Format,
            Self::Stale(_) => Stage::Emit,
        }
    }

    pub(crate) fn fault(message: impl Into<String>) -> Self {
        Self::GenerationFault(message.into())
    }

    /// The violations carried by a schema error, empty for every other kind.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::SchemaViolation(violations) => violations,
            _ => &[],
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputAccess { stage, path, source } => write!(f, "[{stage}] unable to access '{path}': {source}"),
            Self::SchemaViolation(violations) => {
                write!(f, "[{}] configuration is invalid ({} violation(s))", Stage::Validate, violations.len())?;
                for violation in violations {
                    write!(f, "\n  - {violation}")?;
                }
                Ok(())
            }
            Self::Parse { stage, message } => write!(f, "[{stage}] unable to parse configuration: {message}"),
            Self::GenerationFault(message) => write!(f, "[{}] internal code generation fault: {message}", Stage::Generate),
            Self::Formatting {
                message,
                line,
                column,
                snippet,
            } => write!(
                f,
                "[{}] generated code is not valid Rust at line {line}, column {column}: {message}\n  | {snippet}",
                Stage::Format
            ),
            Self::Stale(path) => write!(f, "[{}] '{path}' is out of date; re-run `promc generate`", Stage::Emit),
        }
    }
}

impl core::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InputAccess { source, .. } => Some(source),
            _ => None,
        }
    }
}
