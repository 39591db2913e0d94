//! Line-oriented input primitives.
//!
//! Everything reads from a generic [`BufRead`] and echoes prompts to a
//! generic [`Write`], so callers can run a whole session over in-memory
//! buffers.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReadError {
    /// The input stream ended before a value was read.
    #[error("input stream closed before a value was read")]
    Eof,
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Reads one line and returns it with surrounding whitespace trimmed.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, ReadError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ReadError::Eof);
    }
    Ok(line.trim().to_string())
}

/// Prompts for a number, re-prompting until the line parses as `f64`.
///
/// The retry loop is unbounded; the only way out without a valid number
/// is the stream closing.
pub fn read_amount<R, W>(prompt: &str, reader: &mut R, out: &mut W) -> Result<f64, ReadError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let line = read_line(reader)?;
        match line.parse::<f64>() {
            Ok(value) => {
                debug!(prompt, value, "accepted numeric input");
                return Ok(value);
            }
            Err(_) => {
                debug!(prompt, rejected = line.as_str(), "rejected numeric input");
                crate::warn!(out, "Please enter a valid number.");
            }
        }
    }
}
