use super::{LabelSet, MetricKind};
use crate::codegen::ident::{camel_case, field_ident, is_usable, snake_case};
use crate::error::{GenerateError, Stage, Violation};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

const LOG_TARGET: &str = "    config";

/// Label the backend adds to every histogram series.
const BUCKET_LABEL: &str = "le";

static METRIC_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("invalid regex"));
static LABEL_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("invalid regex"));

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    metrics: Vec<MetricEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MetricEntry {
    name: String,
    #[serde(rename = "type")]
    kind: MetricKind,
    #[serde(default)]
    help: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    buckets: Option<Vec<f64>>,
}

/// One declared metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDefinition {
    pub name: String,
    pub kind: MetricKind,

    /// From `help`, falling back to `description`, empty when both are absent.
    pub help: String,

    /// Label names in declaration order.
    pub labels: Vec<String>,

    /// Bucket thresholds, only ever present for histograms.
    pub buckets: Option<Vec<f64>>,
}

impl From<MetricEntry> for MetricDefinition {
    fn from(entry: MetricEntry) -> Self {
        Self {
            name: entry.name,
            kind: entry.kind,
            help: entry.help.or(entry.description).unwrap_or_default(),
            labels: entry.labels,
            buckets: entry.buckets,
        }
    }
}

/// The entity graph for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Metrics in document order.
    pub metrics: Vec<MetricDefinition>,
    pub package_name: String,
    pub unique_labels: LabelSet,
}

impl Configuration {
    /// Decode a schema-validated document into the entity graph.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Parse`] if the document does not decode, and
    /// [`GenerateError::SchemaViolation`] listing every cross-entry rule it breaks.
    pub fn load(document: Value, package_name: &str) -> Result<Self, GenerateError> {
        let document: Document = serde_json::from_value(document).map_err(|e| GenerateError::Parse {
            stage: Stage::Load,
            message: e.to_string(),
        })?;

        let metrics: Vec<MetricDefinition> = document.metrics.into_iter().map(MetricDefinition::from).collect();

        let violations = check_semantics(&metrics);
        if !violations.is_empty() {
            return Err(GenerateError::SchemaViolation(violations));
        }

        let unique_labels = LabelSet::collect(&metrics);
        log::info!(target: LOG_TARGET, "Loaded {} metric(s) for package '{package_name}'", metrics.len());

        Ok(Self {
            metrics,
            package_name: package_name.to_string(),
            unique_labels,
        })
    }
}

/// Rules the schema cannot express, checked across the whole document.
fn check_semantics(metrics: &[MetricDefinition]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut snake_idents: HashMap<String, usize> = HashMap::new();
    let mut camel_idents: HashMap<String, usize> = HashMap::new();

    for (index, metric) in metrics.iter().enumerate() {
        let path = format!("/metrics/{index}");
        let name_path = format!("{path}/name");

        if !METRIC_NAME_REGEX.is_match(&metric.name) {
            violations.push(Violation::new(
                &name_path,
                format!("'{}' is not a valid metric name; expected [a-zA-Z_][a-zA-Z0-9_]*", metric.name),
            ));
        } else if let Some(first) = names.insert(&metric.name, index) {
            violations.push(Violation::new(
                &name_path,
                format!("duplicate metric name '{}', first declared at /metrics/{first}", metric.name),
            ));
        } else {
            check_metric_idents(metric, index, &name_path, &mut snake_idents, &mut camel_idents, &mut violations);
        }

        check_labels(metric, &path, &mut violations);
        check_buckets(metric, &path, &mut violations);
    }

    violations
}

fn check_metric_idents(
    metric: &MetricDefinition,
    index: usize,
    name_path: &str,
    snake_idents: &mut HashMap<String, usize>,
    camel_idents: &mut HashMap<String, usize>,
    violations: &mut Vec<Violation>,
) {
    let snake = snake_case(&metric.name);
    let camel = camel_case(&metric.name);

    if !is_usable(&snake) || !is_usable(&camel) {
        violations.push(Violation::new(
            name_path,
            format!("'{}' does not produce a usable identifier", metric.name),
        ));
        return;
    }

    let clash = snake_idents
        .insert(snake, index)
        .or_else(|| camel_idents.insert(camel, index));

    if let Some(first) = clash {
        violations.push(Violation::new(
            name_path,
            format!(
                "'{}' generates the same identifiers as the metric at /metrics/{first}",
                metric.name
            ),
        ));
    }
}

fn check_labels(metric: &MetricDefinition, path: &str, violations: &mut Vec<Violation>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut fields: HashMap<String, usize> = HashMap::new();

    for (index, label) in metric.labels.iter().enumerate() {
        let label_path = format!("{path}/labels/{index}");

        if !LABEL_NAME_REGEX.is_match(label) {
            violations.push(Violation::new(
                &label_path,
                format!("'{label}' is not a valid label name; expected [a-zA-Z_][a-zA-Z0-9_]*"),
            ));
            continue;
        }

        if label.starts_with("__") {
            violations.push(Violation::new(
                &label_path,
                format!("'{label}' uses the reserved '__' prefix"),
            ));
            continue;
        }

        if let Some(first) = seen.insert(label, index) {
            violations.push(Violation::new(
                &label_path,
                format!("duplicate label '{label}', first declared at {path}/labels/{first}"),
            ));
            continue;
        }

        if metric.kind.is_bucketed() && label == BUCKET_LABEL {
            violations.push(Violation::new(
                &label_path,
                format!("'{BUCKET_LABEL}' is reserved for bucket bounds on a {}", metric.kind),
            ));
            continue;
        }

        let field = field_ident(label);
        if !is_usable(&field) {
            violations.push(Violation::new(
                &label_path,
                format!("'{label}' does not produce a usable identifier"),
            ));
        } else if let Some(first) = fields.insert(field, index) {
            violations.push(Violation::new(
                &label_path,
                format!("'{label}' generates the same field as {path}/labels/{first}"),
            ));
        }
    }
}

fn check_buckets(metric: &MetricDefinition, path: &str, violations: &mut Vec<Violation>) {
    let Some(buckets) = &metric.buckets else {
        return;
    };

    let buckets_path = format!("{path}/buckets");
    if metric.kind != MetricKind::Histogram {
        violations.push(Violation::new(
            &buckets_path,
            format!("buckets are only allowed on histograms, not on a {}", metric.kind),
        ));
        return;
    }

    for (index, bound) in buckets.iter().enumerate() {
        if !bound.is_finite() {
            violations.push(Violation::new(format!("{buckets_path}/{index}"), format!("{bound} is not a finite number")));
        }
    }

    for (index, pair) in buckets.windows(2).enumerate() {
        if let [lower, upper] = pair
            && lower >= upper
        {
            violations.push(Violation::new(
                format!("{buckets_path}/{}", index + 1),
                format!("bucket {upper} must be greater than the preceding bucket {lower}"),
            ));
        }
    }
}
