use super::{escape_label_value, Identity, LabelName, LabelValue, MetricIdentity, MetricName};

/// A metric the report depends on.
///
/// Labels keep their declaration order because the exact-match lookup
/// compares against the rendered exposition string.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSelector {
    name: MetricName,
    labels: Vec<(LabelName, LabelValue)>,
}

impl MetricSelector {
    pub fn new<N>(name: N) -> Self
    where
        N: Into<MetricName>,
    {
        Self {
            name: name.into(),
            labels: Vec::new(),
        }
    }

    pub fn with_label<N, V>(mut self, label: N, value: V) -> Self
    where
        N: Into<LabelName>,
        V: Into<LabelValue>,
    {
        self.labels.push((label.into(), value.into()));
        self
    }

    /// Cheap pre-check on the raw key: same metric name, labels not inspected.
    pub fn names(&self, identity: &str) -> bool {
        match identity.strip_prefix(self.name.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('{'),
            None => false,
        }
    }

    /// Renders the key the way the JVM exporter writes it, trailing comma included.
    pub fn exposition(&self) -> MetricIdentity {
        if self.labels.is_empty() {
            return self.name.clone();
        }

        let mut rendered = format!("{}{{", self.name);
        for (label, value) in &self.labels {
            rendered.push_str(&format!("{}=\"{}\",", label, escape_label_value(value)));
        }
        rendered.push('}');
        rendered
    }

    /// Name and label set must be equal; label order is irrelevant.
    pub fn matches(&self, identity: &Identity) -> bool {
        if &self.name != identity.name() || self.labels.len() != identity.labels().len() {
            return false;
        }

        self.labels
            .iter()
            .all(|(label, value)| identity.label(label) == Some(value))
    }
}
