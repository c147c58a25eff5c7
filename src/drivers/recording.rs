//! Recording Source
//!
//! Loads the input recording: UTF-8 text, one decimal sample per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::SourceError;

/// Parse a recording of exactly `expected_len` samples
///
/// Surrounding whitespace on each line is ignored.
///
/// # Errors
///
/// [`SourceError::InvalidInputData`] for a line that is not a finite number
/// or a sample count other than `expected_len`; [`SourceError::Io`] if the
/// reader fails.
pub fn parse_recording<R: BufRead>(reader: R, expected_len: usize) -> Result<Vec<f64>, SourceError> {
    let mut samples = Vec::with_capacity(expected_len);

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        let value: f64 = text.parse().map_err(|_| SourceError::InvalidInputData {
            line: i + 1,
            reason: format!("{text:?} is not a number"),
        })?;
        if !value.is_finite() {
            return Err(SourceError::InvalidInputData {
                line: i + 1,
                reason: format!("{text:?} is not a finite sample"),
            });
        }
        samples.push(value);
    }

    if samples.len() != expected_len {
        return Err(SourceError::InvalidInputData {
            line: 0,
            reason: format!("expected {expected_len} samples, found {}", samples.len()),
        });
    }

    Ok(samples)
}

/// Load a recording file of exactly `expected_len` samples
///
/// # Errors
///
/// [`SourceError::SourceNotFound`] if the file does not exist, plus
/// everything [`parse_recording`] reports.
pub fn load_recording(path: &Path, expected_len: usize) -> Result<Vec<f64>, SourceError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::SourceNotFound(path.to_path_buf()),
        _ => SourceError::Io(e),
    })?;

    let samples = parse_recording(BufReader::new(file), expected_len)?;
    info!(path = %path.display(), samples = samples.len(), "loaded recording");
    Ok(samples)
}
