use super::Host;
use super::common::{CommonArgs, report_failure};
use crate::Result;
use crate::codegen::ident::is_module_name;
use crate::emit::{EmitMode, emit};
use crate::error::GenerateError;
use crate::pipeline::{read_config, render_config};
use camino::Utf8PathBuf;
use clap::Args;
use ohno::IntoAppError;
use std::io::Write;

const LOG_TARGET: &str = "  generate";

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the metrics configuration (JSON, or YAML for `.yaml`/`.yml` files)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Utf8PathBuf,

    /// Path of the Rust source file to generate
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Utf8PathBuf,

    /// Name of the module wrapping the generated code
    #[arg(long, short = 'p', value_name = "NAME", value_parser = parse_package)]
    pub package: String,

    /// Fail if the output file is missing or out of date instead of writing it
    #[arg(long)]
    pub check: bool,
}

fn parse_package(s: &str) -> core::result::Result<String, String> {
    if is_module_name(s) {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' is not a valid Rust module name"))
    }
}

fn generate_inner(args: &GenerateArgs) -> core::result::Result<(), GenerateError> {
    let (bytes, format) = read_config(&args.config)?;
    let rendered = render_config(&bytes, format, &args.package)?;
    let mode = if args.check { EmitMode::Check } else { EmitMode::Write };

    emit(&args.output, &rendered, mode)
}

/// Generate the metric wrappers described by a configuration file
///
/// # Errors
///
/// Returns an error if any pipeline stage fails; the destination is left untouched in that case.
pub fn generate_metrics<H: Host>(host: &mut H, common: &CommonArgs, args: &GenerateArgs) -> Result<()> {
    log::info!(target: LOG_TARGET, "Generating '{}' from '{}'", args.output, args.config);

    match generate_inner(args) {
        Ok(()) => {
            if args.check {
                let _ = writeln!(host.output(), "'{}' is up to date", args.output);
            } else {
                let _ = writeln!(host.output(), "Generated '{}' from '{}'", args.output, args.config);
            }
            Ok(())
        }
        Err(e) => {
            let heading = if args.check { "Check failed" } else { "Generation failed" };
            report_failure(host, common.color, heading, &e);
            host.exit(1);
            Err(e).into_app_err_with(|| format!("generating '{}' from '{}'", args.output, args.config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use std::fs;

    const CONFIG: &str = r#"{
        "metrics": [
            {"name": "active_users", "type": "gauge", "description": "Number of active users."},
            {"name": "http_requests_total", "type": "counter", "labels": ["method", "status"]}
        ]
    }"#;

    struct Workspace {
        _dir: tempfile::TempDir,
        config: Utf8PathBuf,
        output: Utf8PathBuf,
    }

    fn workspace(config: &str) -> Workspace {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = Utf8PathBuf::from(dir.path().to_string_lossy().to_string());
        let config_path = root.join("metrics.json");
        fs::write(&config_path, config).expect("Failed to write test config");

        Workspace {
            _dir: dir,
            config: config_path,
            output: root.join("metrics.rs"),
        }
    }

    fn args(ws: &Workspace, check: bool) -> GenerateArgs {
        GenerateArgs {
            config: ws.config.clone(),
            output: ws.output.clone(),
            package: "dbmetrics".to_string(),
            check,
        }
    }

    #[test]
    fn test_generate_writes_output() {
        let ws = workspace(CONFIG);
        let mut host = TestHost::new();

        generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, false)).unwrap();

        let text = fs::read_to_string(&ws.output).unwrap();
        assert!(text.starts_with("/// Metrics for the `dbmetrics` namespace."), "{text}");
        assert!(text.contains("pub fn set_active_users(value: f64)"));
        assert!(host.output_str().contains("Generated"));
        assert_eq!(host.exit_code, None);
    }

    #[test]
    fn test_regenerating_is_byte_identical() {
        let ws = workspace(CONFIG);
        let mut host = TestHost::new();

        generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, false)).unwrap();
        let first = fs::read(&ws.output).unwrap();
        generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, false)).unwrap();
        let second = fs::read(&ws.output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_check_mode() {
        let ws = workspace(CONFIG);

        let mut host = TestHost::new();
        let result = generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, true));
        assert!(result.is_err(), "missing output should be stale");
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().contains("out of date"), "{}", host.error_str());
        assert!(!ws.output.exists(), "check mode must not write");

        let mut host = TestHost::new();
        generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, false)).unwrap();
        generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, true)).unwrap();
        assert!(host.output_str().contains("is up to date"));

        fs::write(&ws.output, "// edited by hand\n").unwrap();
        let mut host = TestHost::new();
        assert!(generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, true)).is_err());
        assert_eq!(fs::read_to_string(&ws.output).unwrap(), "// edited by hand\n");
    }

    #[test]
    fn test_failure_leaves_existing_output_unchanged() {
        let ws = workspace(r#"{"metrics": [{"name": "active_users", "type": "avg"}]}"#);
        fs::write(&ws.output, "// previous output\n").unwrap();

        let mut host = TestHost::new();
        let result = generate_metrics(&mut host, &CommonArgs::default(), &args(&ws, false));

        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().contains("/metrics/0/type"), "{}", host.error_str());
        assert_eq!(fs::read_to_string(&ws.output).unwrap(), "// previous output\n");
    }

    #[test]
    fn test_missing_config_is_reported() {
        let ws = workspace(CONFIG);
        let mut broken = args(&ws, false);
        broken.config = ws.config.with_file_name("absent.json");

        let mut host = TestHost::new();
        let err = generate_metrics(&mut host, &CommonArgs::default(), &broken).unwrap_err();

        assert!(err.to_string().contains("absent.json"), "{err}");
        assert!(host.error_str().contains("[read]"), "{}", host.error_str());
        assert!(!ws.output.exists());
    }

    #[test]
    fn test_package_names() {
        assert_eq!(parse_package("dbmetrics").unwrap(), "dbmetrics");
        assert_eq!(parse_package("app_metrics2").unwrap(), "app_metrics2");
        assert!(parse_package("DbMetrics").is_err());
        assert!(parse_package("db-metrics").is_err());
        assert!(parse_package("mod").is_err());
        assert!(parse_package("").is_err());
    }
}
