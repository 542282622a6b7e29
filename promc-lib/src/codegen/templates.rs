//! The embedded code templates. Output shape is fixed here; `render` only fills in values.

use super::template::Template;

pub const MODULE_HEADER: Template = Template::new(
    "module_header",
    "/// Metrics for the `{{package}}` namespace.
///
/// Generated by promc. DO NOT EDIT.
pub mod {{package}} {
    use std::sync::LazyLock;
",
);

pub const MODULE_FOOTER: Template = Template::new("module_footer", "}\n");

pub const METRIC_STATIC: Template = Template::new(
    "metric_static",
    "
{{docs}}    pub static {{static_name}}: LazyLock<prometheus::{{backend_type}}> = LazyLock::new(|| {
        let metric = {{constructor}}.expect({{definition_expect}});
        prometheus::register(Box::new(metric.clone())).expect({{register_expect}});
        metric
    });
",
);

pub const OPTS: Template = Template::new("opts", "prometheus::Opts::new({{name}}, {{help}})");

pub const HISTOGRAM_OPTS: Template = Template::new(
    "histogram_opts",
    "prometheus::HistogramOpts::new({{name}}, {{help}}).buckets(vec![{{buckets}}])",
);

pub const UNLABELLED_CONSTRUCTOR: Template = Template::new("unlabelled_constructor", "prometheus::{{backend_type}}::with_opts({{opts}})");

pub const LABELLED_CONSTRUCTOR: Template = Template::new(
    "labelled_constructor",
    "prometheus::{{backend_type}}::new({{opts}}, &[{{label_names}}])",
);

pub const LABELS_STRUCT: Template = Template::new(
    "labels_struct",
    "
    /// Label values for [`{{static_name}}`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct {{type_name}}<'a> {
{{fields}}    }
",
);

pub const LABEL_FIELD: Template = Template::new(
    "label_field",
    "        /// Value of the `{{label}}` label.
        pub {{field}}: &'a str,
",
);

pub const RECORD_FN: Template = Template::new(
    "record_fn",
    "
    /// {{summary}}
    pub fn {{fn_name}}(value: f64) {
        {{static_name}}.{{method}}(value);
    }
",
);

pub const LABELLED_RECORD_FN: Template = Template::new(
    "labelled_record_fn",
    "
    /// {{summary}}
    pub fn {{fn_name}}(labels: {{type_name}}<'_>, value: f64) {
        {{static_name}}.with_label_values(&[{{label_values}}]).{{method}}(value);
    }
",
);
