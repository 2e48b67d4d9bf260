mod keys;
mod lookup;
mod report;

pub use keys::*;
pub use lookup::{ExactLookup, LabelLookup, Lookup};
pub use report::Report;
