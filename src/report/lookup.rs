use crate::error::{Error, ErrorKind, Result};
use crate::model::{MetricSelector, RawMetricMap, SampleValue};
use crate::parse::parse_identity;

/// Resolves the metrics a report needs against a parsed dump.
pub trait Lookup {
    fn get(&self, selector: &MetricSelector) -> Result<SampleValue>;

    /// Value of the last identity, in input order, starting with `prefix`.
    fn last_with_prefix(&self, prefix: &str) -> Result<SampleValue>;
}

/// Matches the exporter's key strings byte for byte.
pub struct ExactLookup<'a> {
    raw: &'a RawMetricMap,
}

impl<'a> ExactLookup<'a> {
    pub fn new(raw: &'a RawMetricMap) -> Self {
        Self { raw }
    }
}

impl<'a> Lookup for ExactLookup<'a> {
    fn get(&self, selector: &MetricSelector) -> Result<SampleValue> {
        let identity = selector.exposition();
        self.raw
            .get(&identity)
            .ok_or_else(|| Error::key_not_found(&identity))
    }

    fn last_with_prefix(&self, prefix: &str) -> Result<SampleValue> {
        last_with_prefix(self.raw, prefix)
    }
}

/// Matches on metric name and label set, so label order, padding and the
/// trailing comma don't matter. Only keys carrying the selector's metric name
/// go through the identity parser.
pub struct LabelLookup<'a> {
    raw: &'a RawMetricMap,
}

impl<'a> LabelLookup<'a> {
    pub fn new(raw: &'a RawMetricMap) -> Self {
        Self { raw }
    }
}

impl<'a> Lookup for LabelLookup<'a> {
    fn get(&self, selector: &MetricSelector) -> Result<SampleValue> {
        let mut matched = Vec::new();
        for (identity, value) in self.raw.iter().filter(|(identity, _)| selector.names(identity)) {
            let parsed = parse_identity(identity).map_err(|e| {
                Error::new(
                    ErrorKind::Parse,
                    &format!("cannot parse identity {}: {}", identity, e),
                )
            })?;
            if selector.matches(&parsed) {
                matched.push(value);
            }
        }

        let exposition = selector.exposition();
        if matched.len() > 1 {
            tracing::warn!(
                selector = exposition.as_str(),
                count = matched.len(),
                "several series match, using the last one"
            );
        }

        matched
            .last()
            .copied()
            .ok_or_else(|| Error::key_not_found(&exposition))
    }

    fn last_with_prefix(&self, prefix: &str) -> Result<SampleValue> {
        last_with_prefix(self.raw, prefix)
    }
}

fn last_with_prefix(raw: &RawMetricMap, prefix: &str) -> Result<SampleValue> {
    let matched: Vec<_> = raw
        .iter()
        .filter(|(identity, _)| identity.starts_with(prefix))
        .collect();

    if matched.len() > 1 {
        tracing::warn!(
            prefix,
            count = matched.len(),
            "several identities share the prefix, using the last one"
        );
    }

    matched
        .last()
        .map(|(_, value)| *value)
        .ok_or_else(|| Error::key_not_found(&format!("{}*", prefix)))
}
