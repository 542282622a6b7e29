//! Command dispatch logic for promc

use super::common::{CommonArgs, init_logging};
use super::{GenerateArgs, ValidateArgs, generate_metrics, print_version, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use ohno::IntoAppError;
use std::io::Write;

const LOG_TARGET: &str = "       run";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "promc", version, author, long_about = None)]
#[command(about = "Generate strongly typed Prometheus metric wrappers from a declarative configuration")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: PromcSubcommand,
}

#[derive(Subcommand, Debug)]
enum PromcSubcommand {
    /// Generate a Rust metrics module from a configuration file
    Generate(GenerateArgs),
    /// Validate a configuration file without generating code
    Validate(ValidateArgs),
    /// Print version information
    Version,
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = write!(host.output(), "{}", e.render());
            return Ok(());
        }
        Err(e) => {
            let _ = write!(host.error(), "{}", e.render());
            host.exit(1);
            return Err(e).into_app_err("parsing command-line arguments");
        }
    };

    init_logging(cli.common.log_level);
    log::debug!(target: LOG_TARGET, "Dispatching {:?}", cli.command);

    match &cli.command {
        PromcSubcommand::Generate(generate_args) => generate_metrics(host, &cli.common, generate_args),
        PromcSubcommand::Validate(validate_args) => validate_config(host, &cli.common, validate_args),
        PromcSubcommand::Version => print_version(host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_goes_to_output() {
        let mut host = TestHost::new();
        run(&mut host, ["promc", "--help"]).unwrap();

        assert!(host.output_str().contains("generate"), "{}", host.output_str());
        assert_eq!(host.exit_code, None);
    }

    #[test]
    fn test_version_flag() {
        let mut host = TestHost::new();
        run(&mut host, ["promc", "--version"]).unwrap();
        assert!(host.output_str().contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_version_command() {
        let mut host = TestHost::new();
        run(&mut host, ["promc", "version"]).unwrap();
        assert!(host.output_str().starts_with("promc "));
    }

    #[test]
    fn test_missing_arguments_are_usage_errors() {
        let mut host = TestHost::new();
        let result = run(&mut host, ["promc", "generate", "--config", "metrics.json", "--package", "app"]);

        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().contains("--output"), "{}", host.error_str());
    }

    #[test]
    fn test_invalid_package_is_a_usage_error() {
        let mut host = TestHost::new();
        let result = run(
            &mut host,
            ["promc", "generate", "-c", "metrics.json", "-o", "metrics.rs", "-p", "Not-Valid"],
        );

        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().contains("not a valid Rust module name"), "{}", host.error_str());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let mut host = TestHost::new();
        run(&mut host, ["promc", "version", "--color", "never", "--log-level", "none"]).unwrap();
        assert!(host.output_str().starts_with("promc "));
    }
}
