use std::str::Lines;

use crate::error::{Error, Result};
use crate::model::{RawMetricMap, Sample, SampleValue};

const COMMENT_PREFIX: &str = "#";

/// Parses a whole exposition dump. Fails on the first malformed line.
pub fn parse(text: &str) -> Result<RawMetricMap> {
    samples(text).collect()
}

pub fn samples(text: &str) -> SampleReader {
    SampleReader::new(text)
}

/// Yields one `Sample` per non-comment line.
pub struct SampleReader<'a> {
    lines: Lines<'a>,
    line_no: usize,
}

impl<'a> SampleReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }
}

impl<'a> std::iter::Iterator for SampleReader<'a> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;

            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            return Some(parse_line(self.line_no, line));
        }
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<Sample> {
    // Label values may contain spaces, the value never does.
    let split_at = line.rfind(' ').ok_or_else(|| {
        Error::parse(line_no, &format!("no space separated value in \"{}\"", line))
    })?;

    let (identity, raw_value) = (&line[..split_at], &line[split_at + 1..]);
    let value = parse_value(line_no, raw_value)?;
    Ok(Sample::new(line_no, identity, raw_value, value))
}

fn parse_value(line_no: usize, token: &str) -> Result<SampleValue> {
    token.parse::<SampleValue>().map_err(|_| {
        Error::parse(line_no, &format!("\"{}\" is not a valid sample value", token))
    })
}
