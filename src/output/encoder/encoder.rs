use crate::error::Result;
use crate::model::{Sample, SampleValue};
use crate::report::Report;

pub enum Value<'a> {
    Sample(&'a Sample),
    Report(&'a Report),
}

pub trait Encoder {
    fn encode(&self, value: &Value) -> Result<Vec<u8>>;
}

/// Shortest representation that reads back to the same `f64` (`100.0`, `0.5`, `NaN`, `inf`).
pub fn format_value(value: SampleValue) -> String {
    format!("{:?}", value)
}
