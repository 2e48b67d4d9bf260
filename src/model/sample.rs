use super::{MetricIdentity, SampleValue};

/// A single non-comment line of an exposition dump.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    line_no: usize,
    identity: MetricIdentity,
    raw_value: String,
    value: SampleValue,
}

impl Sample {
    pub fn new<I, R>(line_no: usize, identity: I, raw_value: R, value: SampleValue) -> Self
    where
        I: Into<MetricIdentity>,
        R: Into<String>,
    {
        Self {
            line_no,
            identity: identity.into(),
            raw_value: raw_value.into(),
            value,
        }
    }

    #[inline]
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    #[inline]
    pub fn identity(&self) -> &MetricIdentity {
        &self.identity
    }

    /// The value token exactly as it appeared in the input.
    #[inline]
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    #[inline]
    pub fn value(&self) -> SampleValue {
        self.value
    }
}
