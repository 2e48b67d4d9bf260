use super::{Labels, MetricName};

/// Structured view of an exposition key: metric name plus label set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: MetricName,
    labels: Labels,
}

impl Identity {
    pub fn new<N>(name: N, labels: Labels) -> Self
    where
        N: Into<MetricName>,
    {
        Self {
            name: name.into(),
            labels,
        }
    }

    #[inline]
    pub fn name(&self) -> &MetricName {
        &self.name
    }

    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn label(&self, name: &str) -> Option<&String> {
        self.labels.get(name)
    }
}
