mod encoder;
mod human;
mod json;

pub use encoder::{format_value, Encoder, Value};
pub use human::{render, HumanReadableEncoder};
pub use json::JsonEncoder;
