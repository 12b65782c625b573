use crate::error::{AcpError, Result};
use serde_json::Value;
use std::io::{BufRead, BufReader, Read};

/// Reads raw records from a JSON Lines source.
///
/// Each non-blank line is parsed as one JSON value. Nothing is validated here;
/// the values are handed to the record validator as-is.
pub struct RecordReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and parses one value per line.
    ///
    /// Yields `(line_number, result)` pairs, 1-based, skipping blank lines.
    pub fn records(self) -> impl Iterator<Item = (usize, Result<Value>)> {
        self.reader
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let parsed = match line {
                    Ok(line) if line.trim().is_empty() => return None,
                    Ok(line) => serde_json::from_str(&line).map_err(AcpError::from),
                    Err(e) => Err(AcpError::from(e)),
                };
                Some((index + 1, parsed))
            })
    }
}
