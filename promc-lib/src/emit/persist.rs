use crate::error::{GenerateError, Stage};
use camino::Utf8Path;
use std::fs::{self, Permissions};
use std::io::{self, Write};
use tempfile::NamedTempFile;

const LOG_TARGET: &str = "   persist";

fn access_error(path: &Utf8Path, source: io::Error) -> GenerateError {
    GenerateError::InputAccess {
        stage: Stage::Emit,
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
const fn default_permissions() -> Option<Permissions> {
    None
}

/// Replace `path` with `contents` without ever exposing a partial file.
///
/// The contents go to a temporary file in the destination directory, which is then renamed over
/// the destination. On failure the destination is left as it was.
///
/// # Errors
///
/// Returns [`GenerateError::InputAccess`] if the temporary file cannot be created, written, or
/// moved into place.
pub fn write_atomic(path: &Utf8Path, contents: &str) -> Result<(), GenerateError> {
    let dir = path.parent().filter(|p| !p.as_str().is_empty()).unwrap_or_else(|| Utf8Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| access_error(path, e))?;
    temp.write_all(contents.as_bytes()).map_err(|e| access_error(path, e))?;
    temp.as_file().sync_all().map_err(|e| access_error(path, e))?;

    let permissions = fs::metadata(path).map(|m| m.permissions()).ok().or_else(default_permissions);
    if let Some(permissions) = permissions {
        fs::set_permissions(temp.path(), permissions).map_err(|e| access_error(path, e))?;
    }

    let _ = temp.persist(path).map_err(|e| access_error(path, e.error))?;

    log::info!(target: LOG_TARGET, "Wrote {} bytes to '{path}'", contents.len());
    Ok(())
}

/// Verify that `path` already holds exactly `contents`.
///
/// # Errors
///
/// Returns [`GenerateError::Stale`] if the file is missing or differs, and
/// [`GenerateError::InputAccess`] if it exists but cannot be read.
pub fn check_current(path: &Utf8Path, contents: &str) -> Result<(), GenerateError> {
    match fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => {
            log::info!(target: LOG_TARGET, "'{path}' is up to date");
            Ok(())
        }
        Ok(_) => Err(GenerateError::Stale(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(GenerateError::Stale(path.to_path_buf())),
        Err(e) => Err(access_error(path, e)),
    }
}
