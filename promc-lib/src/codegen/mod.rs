//! Rendering of the entity graph into Rust source text.
//!
//! # Implementation Model
//!
//! Output shape lives in fixed `templates` with `{{name}}` placeholders; [`render`] walks the
//! metrics in document order and fills them in. For each metric it emits:
//!
//! - a `LazyLock` static that constructs and registers the backend metric (`prometheus` crate),
//! - for labelled metrics, a `<Name>Labels<'a>` struct with one `&'a str` field per label,
//! - a recording function named after the metric kind's verb (`increment_`, `set_`, `observe_`).
//!
//! The [`ident`] transforms derive every generated name from the configuration names. The text
//! produced here is not formatted; the `emit` stage parses and pretty-prints it.

pub mod ident;
mod render;
mod template;
mod templates;

pub use render::{DEFAULT_BUCKETS, render};
