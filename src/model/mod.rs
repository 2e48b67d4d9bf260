mod identity;
mod labels;
mod metric_map;
mod sample;
mod selector;

pub use identity::*;
pub use labels::*;
pub use metric_map::*;
pub use sample::*;
pub use selector::*;

pub type MetricName = String;

// Full exposition key, e.g. `name{label="value",}`.
pub type MetricIdentity = String;

pub type SampleValue = f64;
