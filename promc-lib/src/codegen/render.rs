use super::ident::{camel_case, field_ident, is_module_name, is_usable, screaming_case, snake_case};
use super::templates::{
    HISTOGRAM_OPTS, LABEL_FIELD, LABELLED_CONSTRUCTOR, LABELLED_RECORD_FN, LABELS_STRUCT, METRIC_STATIC, MODULE_FOOTER,
    MODULE_HEADER, OPTS, RECORD_FN, UNLABELLED_CONSTRUCTOR,
};
use crate::error::GenerateError;
use crate::model::{Configuration, MetricDefinition, MetricKind};

const LOG_TARGET: &str = "    render";

/// Histogram thresholds used when a histogram declares no buckets, and for every summary.
pub const DEFAULT_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Names derived from one metric definition.
struct MetricIdents {
    static_name: String,
    type_name: String,
    fn_name: String,
}

impl MetricIdents {
    fn new(metric: &MetricDefinition) -> Result<Self, GenerateError> {
        let snake = snake_case(&metric.name);
        let camel = camel_case(&metric.name);
        if !is_usable(&snake) || !is_usable(&camel) {
            return Err(GenerateError::fault(format!("metric '{}' has no usable identifier", metric.name)));
        }

        Ok(Self {
            static_name: screaming_case(&metric.name),
            type_name: format!("{camel}Labels"),
            fn_name: format!("{}_{snake}", metric.kind.verb()),
        })
    }
}

/// Render the unformatted source text for `config`.
///
/// Metrics are emitted in document order, and label fields in each metric's declared order,
/// so identical input always renders identical text.
///
/// # Errors
///
/// Returns [`GenerateError::GenerationFault`] when the configuration is in a state validation
/// should have excluded, or a template cannot be filled.
pub fn render(config: &Configuration) -> Result<String, GenerateError> {
    if !is_module_name(&config.package_name) {
        return Err(GenerateError::fault(format!(
            "'{}' is not a valid module name",
            config.package_name
        )));
    }

    let mut out = String::new();
    MODULE_HEADER.render_into(&mut out, &[("package", config.package_name.as_str())])?;

    for metric in &config.metrics {
        render_metric(&mut out, metric)?;
    }

    MODULE_FOOTER.render_into(&mut out, &[])?;

    log::debug!(target: LOG_TARGET, "Rendered {} metric(s) into {} bytes", config.metrics.len(), out.len());
    Ok(out)
}

fn render_metric(out: &mut String, metric: &MetricDefinition) -> Result<(), GenerateError> {
    let idents = MetricIdents::new(metric)?;
    let name_literal = string_literal(&metric.name);

    // An empty help string is rejected by the backend, so fall back to the metric name.
    let help_literal = if metric.help.is_empty() {
        name_literal.clone()
    } else {
        string_literal(&metric.help)
    };

    let opts = if metric.kind.is_bucketed() {
        let buckets = buckets_for(metric)?;
        HISTOGRAM_OPTS.render(&[("name", name_literal.as_str()), ("help", help_literal.as_str()), ("buckets", buckets.as_str())])?
    } else if metric.buckets.is_some() {
        return Err(GenerateError::fault(format!(
            "{} '{}' carries buckets",
            metric.kind, metric.name
        )));
    } else {
        OPTS.render(&[("name", name_literal.as_str()), ("help", help_literal.as_str())])?
    };

    let labelled = !metric.labels.is_empty();
    let backend_type = if labelled {
        metric.kind.backend_vec_type()
    } else {
        metric.kind.backend_type()
    };

    let constructor = if labelled {
        let label_names = metric.labels.iter().map(|label| string_literal(label)).collect::<Vec<_>>().join(", ");
        LABELLED_CONSTRUCTOR.render(&[("backend_type", backend_type), ("opts", opts.as_str()), ("label_names", label_names.as_str())])?
    } else {
        UNLABELLED_CONSTRUCTOR.render(&[("backend_type", backend_type), ("opts", opts.as_str())])?
    };

    let definition_expect = string_literal(&format!("metric '{}' should have a valid definition", metric.name));
    let register_expect = string_literal(&format!("metric '{}' should only be registered once", metric.name));

    METRIC_STATIC.render_into(
        out,
        &[
            ("docs", doc_lines(metric).as_str()),
            ("static_name", idents.static_name.as_str()),
            ("backend_type", backend_type),
            ("constructor", constructor.as_str()),
            ("definition_expect", definition_expect.as_str()),
            ("register_expect", register_expect.as_str()),
        ],
    )?;

    let summary = record_summary(metric);
    if labelled {
        let mut fields = String::new();
        for label in &metric.labels {
            LABEL_FIELD.render_into(&mut fields, &[("label", label.as_str()), ("field", field_ident(label).as_str())])?;
        }

        LABELS_STRUCT.render_into(
            out,
            &[
                ("static_name", idents.static_name.as_str()),
                ("type_name", idents.type_name.as_str()),
                ("fields", fields.as_str()),
            ],
        )?;

        let label_values = metric
            .labels
            .iter()
            .map(|label| format!("labels.{}", field_ident(label)))
            .collect::<Vec<_>>()
            .join(", ");

        LABELLED_RECORD_FN.render_into(
            out,
            &[
                ("summary", summary.as_str()),
                ("fn_name", idents.fn_name.as_str()),
                ("type_name", idents.type_name.as_str()),
                ("static_name", idents.static_name.as_str()),
                ("label_values", label_values.as_str()),
                ("method", metric.kind.record_method()),
            ],
        )
    } else {
        RECORD_FN.render_into(
            out,
            &[
                ("summary", summary.as_str()),
                ("fn_name", idents.fn_name.as_str()),
                ("static_name", idents.static_name.as_str()),
                ("method", metric.kind.record_method()),
            ],
        )
    }
}

fn buckets_for(metric: &MetricDefinition) -> Result<String, GenerateError> {
    let buckets = match (metric.kind, metric.buckets.as_deref()) {
        (MetricKind::Histogram, Some(buckets)) if !buckets.is_empty() => buckets,
        (MetricKind::Histogram, _) | (MetricKind::Summary, None) => DEFAULT_BUCKETS,
        (kind, _) => {
            return Err(GenerateError::fault(format!("{kind} '{}' carries buckets", metric.name)));
        }
    };

    if let Some(bound) = buckets.iter().find(|bound| !bound.is_finite()) {
        return Err(GenerateError::fault(format!("metric '{}' has non-finite bucket {bound}", metric.name)));
    }

    Ok(buckets.iter().map(|bound| format!("{bound:?}")).collect::<Vec<_>>().join(", "))
}

fn doc_lines(metric: &MetricDefinition) -> String {
    if metric.help.is_empty() {
        return format!("    /// The `{}` {}.\n", metric.name, metric.kind);
    }

    metric
        .help
        .replace('\r', " ")
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                "    ///\n".to_string()
            } else {
                format!("    /// {}\n", line.trim_end())
            }
        })
        .collect()
}

fn record_summary(metric: &MetricDefinition) -> String {
    match metric.kind {
        MetricKind::Counter => format!("Increments `{}` by `value`.", metric.name),
        MetricKind::Gauge => format!("Sets `{}` to `value`.", metric.name),
        MetricKind::Histogram | MetricKind::Summary => format!("Records `value` in `{}`.", metric.name),
    }
}

/// A Rust string literal for `text`, escaped as needed.
fn string_literal(text: &str) -> String {
    format!("{text:?}")
}
