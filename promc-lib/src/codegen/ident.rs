//! Naming-convention transforms from configuration names to Rust identifiers.
//!
//! Configuration names are snake-case style (`request_duration_seconds`). Every transform splits
//! on `_` and drops empty segments, so doubled, leading, and trailing underscores never leave
//! gaps in the result: `a__b` becomes `AB` / `a_b`, and `_x_` becomes `X` / `x`. Digits are kept
//! verbatim. A name with no non-empty segment maps to the empty string, which callers reject.

use regex::Regex;
use std::sync::LazyLock;

/// Words that can be used as identifiers only in raw form (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn", "else", "enum", "extern",
    "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut",
    "override", "priv", "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Words that cannot be identifiers at all, not even raw.
const RESERVED_PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

static MODULE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("invalid regex"));

fn segments(name: &str) -> impl Iterator<Item = &str> {
    name.split('_').filter(|segment| !segment.is_empty())
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// `request_duration_seconds` → `RequestDurationSeconds`
#[must_use]
pub fn camel_case(name: &str) -> String {
    segments(name).map(title_case).collect()
}

/// `Request__Duration` → `request_duration`
#[must_use]
pub fn snake_case(name: &str) -> String {
    segments(name).map(str::to_lowercase).collect::<Vec<_>>().join("_")
}

/// `http_requests_total` → `HTTP_REQUESTS_TOTAL`
#[must_use]
pub fn screaming_case(name: &str) -> String {
    snake_case(name).to_uppercase()
}

/// A struct field identifier for a label name, escaped when it collides with a keyword.
#[must_use]
pub fn field_ident(name: &str) -> String {
    let ident = snake_case(name);
    if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else if RESERVED_PATH_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}

/// Whether a transformed name is non-empty and does not start with a digit.
#[must_use]
pub fn is_usable(ident: &str) -> bool {
    ident.chars().next().is_some_and(|first| !first.is_ascii_digit())
}

/// Whether `name` can be used verbatim as the generated module name.
#[must_use]
pub fn is_module_name(name: &str) -> bool {
    MODULE_NAME_REGEX.is_match(name)
        && name != "_"
        && !RAW_KEYWORDS.contains(&name)
        && !RESERVED_PATH_KEYWORDS.contains(&name)
}
