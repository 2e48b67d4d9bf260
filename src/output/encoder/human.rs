use super::encoder::{format_value, Encoder, Value};
use crate::error::Result;
use crate::model::Sample;
use crate::report::Report;

/// One `label: value` line per report field.
pub fn render(report: &Report) -> Vec<String> {
    report
        .fields()
        .iter()
        .map(|(label, value)| format!("{}: {}", label, format_value(*value)))
        .collect()
}

pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn encode_sample(&self, sample: &Sample) -> Result<Vec<u8>> {
        Ok(format!("{} {}", sample.identity(), sample.raw_value()).into_bytes())
    }

    fn encode_report(&self, report: &Report) -> Result<Vec<u8>> {
        Ok(render(report).join("\n").into_bytes())
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        match value {
            Value::Sample(sample) => self.encode_sample(sample),
            Value::Report(report) => self.encode_report(report),
        }
    }
}
