use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

pub const STDIN_PATH: &str = "-";

/// Reads the whole dump up front; the handle is closed before parsing starts.
pub fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();

    if path.as_os_str() == STDIN_PATH {
        read_all(BufReader::new(io::stdin()), &mut text)
            .map_err(|e| Error::io("cannot read metrics from stdin", e))?;
    } else {
        let file = File::open(path)
            .map_err(|e| Error::io(&format!("cannot open {}", path.display()), e))?;
        read_all(BufReader::new(file), &mut text)
            .map_err(|e| Error::io(&format!("cannot read {}", path.display()), e))?;
    }

    tracing::info!(path = %path.display(), bytes = text.len(), "metrics read");
    Ok(text)
}

fn read_all<R: Read>(mut reader: R, buf: &mut String) -> io::Result<usize> {
    reader.read_to_string(buf)
}
