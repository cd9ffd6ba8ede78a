//! Acquisition-parameter extractors (timing, phase encoding, diffusion).
//!
//! Each field has a path-based entry point that decodes the file and a
//! `*_of` form operating on an already-parsed [`DataSet`], so the aggregate
//! extractor can reuse one parse for all fields.

use std::path::Path;

use crate::decoder::read_dataset;
use crate::error::Result;
use crate::tree::walk::{find_all, find_first};
use crate::tree::DataSet;

use super::tags::{
    leaf_f64, leaf_multi_f64, leaf_str, DIFFUSION_B_VALUE, DIFFUSION_GRADIENT_ORIENTATION,
    ECHO_TIME, PHASE_ENCODING_DIRECTION, REPETITION_TIME,
};

/// Extracts the repetition time in milliseconds, formatted as a string
///
/// Scanners disagree on the unit of this field: a value below 1000 is taken
/// to be in seconds and converted to milliseconds, anything else is passed
/// through unchanged. Returns `None` when the field is absent.
pub fn repetition_time(path: &Path) -> Result<Option<String>> {
    Ok(repetition_time_of(&read_dataset(path)?))
}

pub fn repetition_time_of(dataset: &DataSet) -> Option<String> {
    let tr = find_first(dataset, REPETITION_TIME).and_then(leaf_f64)?;
    let tr_ms = if tr < 1000.0 { tr * 1000.0 } else { tr };
    Some(format!("{}", tr_ms))
}

/// Extracts the echo time, or `-1` when the field is absent
pub fn echo_time(path: &Path) -> Result<f64> {
    Ok(echo_time_of(&read_dataset(path)?))
}

pub fn echo_time_of(dataset: &DataSet) -> f64 {
    find_first(dataset, ECHO_TIME)
        .and_then(leaf_f64)
        .unwrap_or(-1.0)
}

/// Extracts the phase encoding direction ("ROW" or "COL")
///
/// Returns `None` when no dataset in the tree carries the field.
pub fn phase_encoding(path: &Path) -> Result<Option<String>> {
    Ok(phase_encoding_of(&read_dataset(path)?))
}

pub fn phase_encoding_of(dataset: &DataSet) -> Option<String> {
    find_all(dataset, PHASE_ENCODING_DIRECTION)
        .first()
        .and_then(|v| leaf_str(v))
}

/// Extracts all diffusion b-values, one per occurrence in the tree
///
/// Enhanced storage carries one occurrence per frame; the result keeps the
/// frame order. Empty when the scan has no diffusion fields.
pub fn b_values(path: &Path) -> Result<Vec<f64>> {
    Ok(b_values_of(&read_dataset(path)?))
}

pub fn b_values_of(dataset: &DataSet) -> Vec<f64> {
    find_all(dataset, DIFFUSION_B_VALUE)
        .into_iter()
        .filter_map(leaf_f64)
        .collect()
}

/// Extracts all diffusion gradient orientations (b-vectors), per frame
pub fn b_vectors(path: &Path) -> Result<Vec<Vec<f64>>> {
    Ok(b_vectors_of(&read_dataset(path)?))
}

pub fn b_vectors_of(dataset: &DataSet) -> Vec<Vec<f64>> {
    find_all(dataset, DIFFUSION_GRADIENT_ORIENTATION)
        .into_iter()
        .filter_map(leaf_multi_f64)
        .collect()
}
