use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use crate::error::{Error, Result};
use crate::output::{Encoder, HumanReadableEncoder, JsonEncoder};
use crate::runner::LookupMode;

pub const DEFAULT_INPUT: &str = "sample_data/metrics.txt";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "kvmetrics",
    about = "Summarize a key-value store /q/metrics dump (Prometheus text format)"
)]
pub struct CliOpt {
    /// Metrics dump to analyze, `-` for stdin
    #[structopt(parse(from_os_str), default_value = "sample_data/metrics.txt")]
    pub input: PathBuf,

    /// Don't echo parsed samples before the report
    #[structopt(long = "quiet", short = "q")]
    pub quiet: bool,

    /// Output format: human or json
    #[structopt(long = "format", short = "f", default_value = "human")]
    pub format: OutputFormat,

    /// Match metrics by name and label set instead of the exact exporter key
    #[structopt(long = "match-labels")]
    pub match_labels: bool,

    /// Log verbosity, repeat for more (RUST_LOG takes precedence)
    #[structopt(long = "verbose", short = "v", parse(from_occurrences))]
    pub verbose: u8,
}

impl CliOpt {
    pub fn encoder(&self) -> Box<dyn Encoder> {
        match self.format {
            OutputFormat::Human => Box::new(HumanReadableEncoder::new()),
            OutputFormat::Json => Box::new(JsonEncoder::new()),
        }
    }

    pub fn lookup_mode(&self) -> LookupMode {
        if self.match_labels {
            LookupMode::Labels
        } else {
            LookupMode::Exact
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "human" | "h" => Ok(OutputFormat::Human),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format '{}', expected human or json", s).into()),
        }
    }
}
