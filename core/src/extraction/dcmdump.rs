//! Adapter around the external `dcmdump` utility.
//!
//! Some Philips private fields are not exposed by the decoder, so the one
//! extractor that needs them shells out to `dcmdump`, captures its textual
//! dump into a scoped temporary file and scans it for the field's marker
//! line. Every failure mode of this path (tool missing, marker absent,
//! unparseable line) is recovered to the caller's default with a logged
//! warning; it never fails the caller.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

use log::warn;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::error::{DcmetaError, Result};

const MARKER: &str = "StackNumberOfSlices";

/// Reads the Philips `StackNumberOfSlices` field through `dcmdump`
///
/// Returns `0` when the tool is unavailable or its output carries no
/// usable marker line. The temporary dump file is removed on every exit
/// path, including errors.
pub fn stack_number_of_slices(path: &Path) -> i32 {
    match dump_and_scan(path) {
        Ok(count) => count,
        Err(err) => {
            warn!(
                "no '{}' field readable from {}: {}",
                MARKER,
                path.display(),
                err
            );
            0
        }
    }
}

fn dump_and_scan(path: &Path) -> Result<i32> {
    let output = Command::new("dcmdump").arg(path).output()?;
    // NamedTempFile is deleted on drop, so the dump cannot leak even when
    // scanning or parsing fails below
    let mut dump = NamedTempFile::new()?;
    dump.write_all(&output.stdout)?;

    let reader = BufReader::new(dump.reopen()?);
    for line in reader.lines() {
        let line = line?;
        if line.contains(MARKER) {
            return parse_slice_count(&line);
        }
    }
    Err(DcmetaError::ExtractionError(format!(
        "marker line '{}' not found in dump output",
        MARKER
    )))
}

/// Parses the slice count from a `dcmdump` marker line
///
/// The value column ends right before the `#` comment column; with spacing
/// removed, the count is the two digits in front of the `#` (scans carry
/// more than 9 slices).
fn parse_slice_count(line: &str) -> Result<i32> {
    static COUNT_RE: OnceLock<Regex> = OnceLock::new();
    let re = COUNT_RE.get_or_init(|| {
        Regex::new(r"(\d{2})#").expect("Failed to compile regex")
    });

    let compact: String = line.split_whitespace().collect();
    let digits = re
        .captures(&compact)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            DcmetaError::InvalidValue(format!("no slice count in marker line: {}", line))
        })?;
    digits
        .as_str()
        .parse::<i32>()
        .map_err(|e| DcmetaError::InvalidValue(format!("bad slice count '{}': {}", digits.as_str(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slice_count_from_dump_line() {
        let line = "(2001,102d) SS 45                                       #   2, 1 StackNumberOfSlices";
        assert_eq!(parse_slice_count(line).unwrap(), 45);
    }

    #[test]
    fn test_parse_slice_count_rejects_line_without_value() {
        let line = "(2001,102d) SS (no value available)                     #   0, 0 StackNumberOfSlices";
        assert!(parse_slice_count(line).is_err());
    }

    #[test]
    fn test_missing_tool_or_file_recovers_to_zero() {
        // whether or not dcmdump is installed, a nonexistent input cannot
        // produce a marker line, and the adapter must absorb the failure
        assert_eq!(stack_number_of_slices(Path::new("/no/such/file.dcm")), 0);
    }
}
