//! Flags and helpers shared by every command.

use super::Host;
use clap::{Args, ValueEnum};
use core::fmt::Display;
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write, stderr};

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    /// Whether diagnostics written to stderr should be colored.
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stderr().is_terminal(),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Flags accepted by every subcommand
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            color: ColorMode::Never,
            log_level: LogLevel::None,
        }
    }
}

/// Initialize logger based on log level
///
/// `RUST_LOG` takes precedence over the flag. A logger installed earlier in the process is kept.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Write a failure report to the host's error stream.
pub fn report_failure<H: Host>(host: &mut H, color: ColorMode, heading: &str, error: &impl Display) {
    let heading = if color.use_colors() {
        heading.red().bold().to_string()
    } else {
        heading.to_string()
    };

    let _ = writeln!(host.error(), "{heading}: {error}");
}
