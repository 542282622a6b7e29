//! The metric-definition entity graph.
//!
//! A [`Configuration`] is built once per run from a schema-validated document. It owns the
//! metrics in document order and the derived [`LabelSet`], the union of all label names. The
//! union and each metric's ordered label list are kept apart: the former detects reuse, the
//! latter drives code emission.

mod config;
mod labels;
mod metric_kind;

pub use config::{Configuration, MetricDefinition};
pub use labels::LabelSet;
pub use metric_kind::MetricKind;
