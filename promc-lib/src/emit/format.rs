use crate::error::GenerateError;

const LOG_TARGET: &str = "    format";

/// Canonicalize generated Rust source.
///
/// The text is parsed as a complete Rust file and pretty-printed, so the result is stable for a
/// given input and syntactically invalid text is rejected rather than guessed at.
///
/// # Errors
///
/// Returns [`GenerateError::Formatting`] with the position and text of the first syntax error.
pub fn format_source(text: &str) -> Result<String, GenerateError> {
    let file = syn::parse_file(text).map_err(|e| {
        let start = e.span().start();
        let snippet = text
            .lines()
            .nth(start.line.saturating_sub(1))
            .unwrap_or_default()
            .trim()
            .to_string();

        log::debug!(target: LOG_TARGET, "Rejected generated source:\n{text}");

        GenerateError::Formatting {
            message: e.to_string(),
            line: start.line,
            column: start.column + 1,
            snippet,
        }
    })?;

    Ok(prettyplease::unparse(&file))
}
