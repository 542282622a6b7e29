use super::Host;
use super::common::{CommonArgs, report_failure};
use crate::Result;
use crate::model::Configuration;
use crate::pipeline::{load_config, read_config};
use camino::Utf8PathBuf;
use clap::Args;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the metrics configuration (JSON, or YAML for `.yaml`/`.yml` files)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Utf8PathBuf,
}

/// Check a configuration file against the schema and the cross-metric rules, without generating
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or breaks any rule.
pub fn validate_config<H: Host>(host: &mut H, common: &CommonArgs, args: &ValidateArgs) -> Result<()> {
    let result = read_config(&args.config).and_then(|(bytes, format)| load_config(&bytes, format, ""));

    match result {
        Ok(Configuration {
            metrics, unique_labels, ..
        }) => {
            let _ = writeln!(
                host.output(),
                "Configuration '{}' is valid: {} metric(s), {} distinct label(s)",
                args.config,
                metrics.len(),
                unique_labels.len()
            );

            if !unique_labels.is_empty() {
                let _ = writeln!(host.output(), "Labels: {}", unique_labels.iter().collect::<Vec<_>>().join(", "));
            }
            Ok(())
        }
        Err(e) => {
            report_failure(host, common.color, "Configuration validation failed", &e);
            host.exit(1);
            Err(e).into_app_err_with(|| format!("validating '{}'", args.config))
        }
    }
}
