use serde::Deserialize;
use strum::Display;

/// The closed set of metric kinds a configuration may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricKind {
    /// Monotonic accumulator.
    Counter,

    /// Point-in-time value.
    Gauge,

    /// Bucketed distribution.
    Histogram,

    /// Distribution summary, backed by a histogram with the default buckets.
    Summary,
}

impl MetricKind {
    /// Verb prefixed to the recording function name.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Counter => "increment",
            Self::Gauge => "set",
            Self::Histogram | Self::Summary => "observe",
        }
    }

    /// Method invoked on the backend metric to record a value.
    #[must_use]
    pub const fn record_method(self) -> &'static str {
        match self {
            Self::Counter => "inc_by",
            Self::Gauge => "set",
            Self::Histogram | Self::Summary => "observe",
        }
    }

    /// Backend type name for an unlabelled metric.
    #[must_use]
    pub const fn backend_type(self) -> &'static str {
        match self {
            Self::Counter => "Counter",
            Self::Gauge => "Gauge",
            Self::Histogram | Self::Summary => "Histogram",
        }
    }

    /// Backend type name for a labelled metric.
    #[must_use]
    pub const fn backend_vec_type(self) -> &'static str {
        match self {
            Self::Counter => "CounterVec",
            Self::Gauge => "GaugeVec",
            Self::Histogram | Self::Summary => "HistogramVec",
        }
    }

    /// Whether the backend metric is registered with bucket thresholds.
    #[must_use]
    pub const fn is_bucketed(self) -> bool {
        matches!(self, Self::Histogram | Self::Summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_lowercase() {
        let kind: MetricKind = serde_json::from_str("\"histogram\"").unwrap();
        assert_eq!(kind, MetricKind::Histogram);

        let kind: MetricKind = serde_json::from_str("\"summary\"").unwrap();
        assert_eq!(kind, MetricKind::Summary);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<MetricKind>("\"avg\"").is_err());
        assert!(serde_json::from_str::<MetricKind>("\"Counter\"").is_err());
    }

    #[test]
    fn test_display_matches_configuration_spelling() {
        for (kind, text) in [
            (MetricKind::Counter, "counter"),
            (MetricKind::Gauge, "gauge"),
            (MetricKind::Histogram, "histogram"),
            (MetricKind::Summary, "summary"),
        ] {
            assert_eq!(kind.to_string(), text);
            assert_eq!(serde_json::from_value::<MetricKind>(serde_json::Value::from(text)).unwrap(), kind);
        }
    }

    #[test]
    fn test_verbs() {
        assert_eq!(MetricKind::Counter.verb(), "increment");
        assert_eq!(MetricKind::Gauge.verb(), "set");
        assert_eq!(MetricKind::Histogram.verb(), "observe");
        assert_eq!(MetricKind::Summary.verb(), "observe");
    }

    #[test]
    fn test_summary_uses_histogram_backend() {
        assert_eq!(MetricKind::Summary.backend_type(), "Histogram");
        assert_eq!(MetricKind::Summary.backend_vec_type(), "HistogramVec");
        assert!(MetricKind::Summary.is_bucketed());
        assert!(!MetricKind::Gauge.is_bucketed());
    }
}
