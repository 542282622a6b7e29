//! Command-line interface and orchestration for promc
//!
//! This module implements the CLI commands and drives the generation pipeline end to end. It
//! handles argument parsing, logging setup, and turning pipeline failures into user-facing
//! reports and exit codes.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **generate**: Read a metrics configuration, run every pipeline stage, and write the
//!   formatted Rust module atomically (or, with `--check`, compare it with the existing file)
//! - **validate**: Run the schema and semantic checks only, reporting every violation
//! - **version**: Print the tool version and the commit it was built from
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap, initializes logging from the
//! global flags, and routes to the appropriate command handler. Handlers write their result
//! through the [`Host`], report failures on the error stream, request exit code 1, and return
//! the failure as an `ohno::AppError` carrying the command context.

mod common;
mod generate;
mod host;
mod run;
mod validate;
mod version;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use generate::{GenerateArgs, generate_metrics};
pub use host::Host;
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
pub use version::print_version;
