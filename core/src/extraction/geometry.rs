//! Geometry-count extractors (slices, temporal positions).

use std::path::Path;

use crate::decoder::read_dataset;
use crate::error::Result;
use crate::tree::walk::find_first;
use crate::tree::DataSet;

use super::dcmdump;
use super::tags::{
    leaf_int, NUMBER_OF_SLICES, NUMBER_OF_TEMPORAL_POSITIONS, PHILIPS_NUMBER_OF_SLICES,
};

/// Extracts the number of slices, or `0` when absent
///
/// Tries the standard NumberOfSlices tag first and falls back to the
/// Philips private tag only when the standard one is unmatched.
pub fn number_of_slices(path: &Path) -> Result<i32> {
    Ok(number_of_slices_of(&read_dataset(path)?))
}

pub fn number_of_slices_of(dataset: &DataSet) -> i32 {
    find_first(dataset, NUMBER_OF_SLICES)
        .and_then(leaf_int)
        .or_else(|| find_first(dataset, PHILIPS_NUMBER_OF_SLICES).and_then(leaf_int))
        .unwrap_or(0)
}

/// Extracts the number of temporal positions (volumes), or `0` when absent
pub fn number_of_temporal_positions(path: &Path) -> Result<i32> {
    Ok(number_of_temporal_positions_of(&read_dataset(path)?))
}

pub fn number_of_temporal_positions_of(dataset: &DataSet) -> i32 {
    find_first(dataset, NUMBER_OF_TEMPORAL_POSITIONS)
        .and_then(leaf_int)
        .unwrap_or(0)
}

/// Extracts the Philips per-stack slice count through the external
/// `dcmdump` tool, or `0` when the tool or the field is unavailable
///
/// The decoder cannot expose this field, so this extractor bypasses the
/// tag tree entirely. See [`dcmdump::stack_number_of_slices`].
pub fn philips_stack_slices(path: &Path) -> i32 {
    dcmdump::stack_number_of_slices(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_of_slices_primary_tag() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(NUMBER_OF_SLICES, 32);
        assert_eq!(number_of_slices_of(&dataset), 32);
    }

    #[test]
    fn test_number_of_slices_vendor_fallback() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(PHILIPS_NUMBER_OF_SLICES, 24);
        assert_eq!(number_of_slices_of(&dataset), 24);
    }

    #[test]
    fn test_number_of_slices_primary_wins_over_fallback() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(NUMBER_OF_SLICES, 32);
        dataset.put_leaf(PHILIPS_NUMBER_OF_SLICES, 24);
        assert_eq!(number_of_slices_of(&dataset), 32);
    }

    #[test]
    fn test_number_of_slices_zero_value_is_not_absence() {
        // a present zero must not trigger the vendor fallback
        let mut dataset = DataSet::new();
        dataset.put_leaf(NUMBER_OF_SLICES, 0);
        dataset.put_leaf(PHILIPS_NUMBER_OF_SLICES, 24);
        assert_eq!(number_of_slices_of(&dataset), 0);
    }

    #[test]
    fn test_number_of_slices_default() {
        assert_eq!(number_of_slices_of(&DataSet::new()), 0);
    }

    #[test]
    fn test_temporal_positions() {
        assert_eq!(number_of_temporal_positions_of(&DataSet::new()), 0);

        let mut dataset = DataSet::new();
        dataset.put_leaf(NUMBER_OF_TEMPORAL_POSITIONS, "180");
        assert_eq!(number_of_temporal_positions_of(&dataset), 180);
    }
}
