use serde::Serialize;
use serde_json;

use super::encoder::{Encoder, Value};
use crate::error::Result;
use crate::model::{Sample, SampleValue};

#[derive(Serialize)]
struct SampleRepr<'a> {
    line: usize,
    metric: &'a str,
    value: SampleValue,
}

/// One JSON document per line. Non-finite numbers come out as `null`.
pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn encode_sample(&self, sample: &Sample) -> Result<Vec<u8>> {
        serde_json::to_vec(&SampleRepr {
            line: sample.line_no(),
            metric: sample.identity(),
            value: sample.value(),
        })
        .map_err(|e| ("JSON serialization failed", e).into())
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        match value {
            Value::Sample(sample) => self.encode_sample(sample),
            Value::Report(report) => serde_json::to_vec(report)
                .map_err(|e| ("JSON serialization failed", e).into()),
        }
    }
}
