use crate::error::Result;
use crate::model::{RawMetricMap, Sample};
use crate::output::{Encoder, Output, Value, Writer};
use crate::parse;
use crate::report::{LabelLookup, Report};

// text -> Sample* -> RawMetricMap -> Report
//           |                          |
//           v                          v
//        Encoder -> Writer ------> Encoder -> Writer -> stdout
//        (echo, unless quiet)

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LookupMode {
    Exact,
    Labels,
}

pub struct Runner {
    output: Output,
    lookup: LookupMode,
    echo: bool,
}

impl Runner {
    pub fn new(
        writer: Box<dyn Writer>,
        encoder: Box<dyn Encoder>,
        lookup: LookupMode,
        echo: bool,
    ) -> Self {
        Self {
            output: Output::new(writer, encoder),
            lookup,
            echo,
        }
    }

    /// Nothing is written unless the whole input parses and the report derives.
    pub fn run(&mut self, text: &str) -> Result<()> {
        let samples = parse::samples(text).collect::<Result<Vec<Sample>>>()?;
        let raw: RawMetricMap = samples.iter().cloned().collect();
        tracing::info!(samples = samples.len(), series = raw.len(), "metrics parsed");

        let report = match self.lookup {
            LookupMode::Exact => Report::derive(&raw)?,
            LookupMode::Labels => Report::derive_with(&LabelLookup::new(&raw))?,
        };

        if self.echo {
            for sample in &samples {
                self.output.write(&Value::Sample(sample))?;
            }
        }

        self.output.write(&Value::Report(&report))
    }
}
