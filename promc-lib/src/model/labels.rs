use super::MetricDefinition;
use std::collections::BTreeSet;

const LOG_TARGET: &str = "    labels";

/// The union of every label name used by any metric in a configuration.
///
/// This is a detection aid only. Generated label structs follow each metric's own ordered
/// `labels` list, never the iteration order of this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    names: BTreeSet<String>,
}

impl LabelSet {
    /// Collect the label names of `metrics`, logging any label shared by more than one metric.
    #[must_use]
    pub fn collect(metrics: &[MetricDefinition]) -> Self {
        let mut names = BTreeSet::new();
        for metric in metrics {
            for label in &metric.labels {
                if !names.insert(label.clone()) {
                    log::debug!(target: LOG_TARGET, "Label '{label}' is reused by metric '{}'", metric.name);
                }
            }
        }

        log::debug!(target: LOG_TARGET, "Collected {} unique label(s)", names.len());
        Self { names }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
