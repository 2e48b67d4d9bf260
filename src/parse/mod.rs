mod common;
mod exposition;
mod identity;
mod result;

pub use exposition::{parse, samples, SampleReader};
pub use identity::{identity, parse_identity};
pub use result::{IResult, ParseError, Span};
