use super::Host;
use crate::Result;
use std::io::Write;

/// The git commit recorded by the build script, or `unknown`.
pub const GIT_COMMIT: &str = env!("PROMC_GIT_COMMIT");

/// Print the tool version and the commit it was built from
///
/// # Errors
///
/// This command does not fail; the signature matches the other command handlers.
pub fn print_version<H: Host>(host: &mut H) -> Result<()> {
    let _ = writeln!(host.output(), "promc {} ({GIT_COMMIT})", env!("CARGO_PKG_VERSION"));
    Ok(())
}
