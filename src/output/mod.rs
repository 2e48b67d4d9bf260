mod encoder;
mod output;
mod writer;

pub use encoder::{format_value, render, Encoder, HumanReadableEncoder, JsonEncoder, Value};
pub use output::Output;
pub use writer::{LineWriter, Writer};
