use std::collections::HashMap;
use std::iter::FromIterator;

use super::{MetricIdentity, Sample, SampleValue};

/// Identity to value mapping built from one exposition dump.
///
/// Iteration follows the order in which identities first appeared in the
/// input. A repeated identity overwrites the value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetricMap {
    entries: Vec<(MetricIdentity, SampleValue)>,
    index: HashMap<MetricIdentity, usize>,
}

impl RawMetricMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value if the identity was already present.
    pub fn insert<I>(&mut self, identity: I, value: SampleValue) -> Option<SampleValue>
    where
        I: Into<MetricIdentity>,
    {
        let identity = identity.into();
        match self.index.get(&identity) {
            Some(&pos) => {
                let prev = self.entries[pos].1;
                self.entries[pos].1 = value;
                Some(prev)
            }
            None => {
                self.index.insert(identity.clone(), self.entries.len());
                self.entries.push((identity, value));
                None
            }
        }
    }

    pub fn get(&self, identity: &str) -> Option<SampleValue> {
        self.index.get(identity).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MetricIdentity, SampleValue)> {
        self.entries.iter().map(|(identity, value)| (identity, *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Sample> for RawMetricMap {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        let mut map = Self::new();
        for sample in iter {
            if map.insert(sample.identity().clone(), sample.value()).is_some() {
                tracing::debug!(
                    line = sample.line_no(),
                    identity = sample.identity().as_str(),
                    "duplicate identity, keeping the later value"
                );
            }
        }
        map
    }
}
