//! Identifier and descriptive-field extractors.
//!
//! Free-text identifiers (manufacturer, protocol, UIDs) are sanitized by
//! replacing spaces with underscores so they can be embedded in file names
//! downstream. Absent fields resolve to the documented sentinel of each
//! field rather than an error.

use std::path::Path;

use dicom_core::Tag;

use crate::decoder::read_dataset;
use crate::error::Result;
use crate::tree::walk::{find_all, find_first};
use crate::tree::DataSet;

use super::tags::{
    leaf_f64, leaf_int, leaf_str, ACQUISITION_DATE, GE_RAW_DATA_RUN_NUMBER,
    INSTANCE_CREATION_TIME, MANUFACTURER, MANUFACTURER_MODEL_NAME, PROTOCOL_NAME,
    REFERENCED_SOP_INSTANCE_UID, SERIES_DESCRIPTION, SERIES_INSTANCE_UID, SERIES_NUMBER,
    SOP_CLASS_UID, SOP_INSTANCE_UID,
};

const UNKNOWN: &str = "unknown";

fn sanitize(value: String) -> String {
    value.replace(' ', "_")
}

/// First match for the tag, sanitized, or `"unknown"` when absent
fn sanitized_or_unknown(dataset: &DataSet, tag: Tag) -> String {
    find_first(dataset, tag)
        .and_then(leaf_str)
        .map(sanitize)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Extracts the manufacturer name, spaces replaced by underscores
pub fn manufacturer(path: &Path) -> Result<String> {
    Ok(manufacturer_of(&read_dataset(path)?))
}

pub fn manufacturer_of(dataset: &DataSet) -> String {
    sanitized_or_unknown(dataset, MANUFACTURER)
}

/// Extracts the manufacturer model name, spaces replaced by underscores
pub fn manufacturer_model(path: &Path) -> Result<String> {
    Ok(manufacturer_model_of(&read_dataset(path)?))
}

pub fn manufacturer_model_of(dataset: &DataSet) -> String {
    sanitized_or_unknown(dataset, MANUFACTURER_MODEL_NAME)
}

/// Extracts the sequence (series description) name
pub fn sequence_name(path: &Path) -> Result<String> {
    Ok(sequence_name_of(&read_dataset(path)?))
}

pub fn sequence_name_of(dataset: &DataSet) -> String {
    sanitized_or_unknown(dataset, SERIES_DESCRIPTION)
}

/// Extracts the protocol name
pub fn protocol_name(path: &Path) -> Result<String> {
    Ok(protocol_name_of(&read_dataset(path)?))
}

pub fn protocol_name_of(dataset: &DataSet) -> String {
    sanitized_or_unknown(dataset, PROTOCOL_NAME)
}

/// Extracts the SOP instance UID
pub fn sop_instance_uid(path: &Path) -> Result<String> {
    Ok(sop_instance_uid_of(&read_dataset(path)?))
}

pub fn sop_instance_uid_of(dataset: &DataSet) -> String {
    sanitized_or_unknown(dataset, SOP_INSTANCE_UID)
}

/// Extracts the series instance UID
pub fn series_instance_uid(path: &Path) -> Result<String> {
    Ok(series_instance_uid_of(&read_dataset(path)?))
}

pub fn series_instance_uid_of(dataset: &DataSet) -> String {
    sanitized_or_unknown(dataset, SERIES_INSTANCE_UID)
}

/// Extracts the acquisition date, or `"0"` when absent
pub fn acquisition_date(path: &Path) -> Result<String> {
    Ok(acquisition_date_of(&read_dataset(path)?))
}

pub fn acquisition_date_of(dataset: &DataSet) -> String {
    find_first(dataset, ACQUISITION_DATE)
        .and_then(leaf_str)
        .unwrap_or_else(|| "0".to_string())
}

/// Extracts the series number, or `"0"` when absent
pub fn series_number(path: &Path) -> Result<String> {
    Ok(series_number_of(&read_dataset(path)?))
}

pub fn series_number_of(dataset: &DataSet) -> String {
    find_first(dataset, SERIES_NUMBER)
        .and_then(leaf_str)
        .unwrap_or_else(|| "0".to_string())
}

/// Extracts the instance creation time as a float, `None` when absent
pub fn instance_creation_time(path: &Path) -> Result<Option<f64>> {
    Ok(instance_creation_time_of(&read_dataset(path)?))
}

pub fn instance_creation_time_of(dataset: &DataSet) -> Option<f64> {
    find_first(dataset, INSTANCE_CREATION_TIME).and_then(leaf_f64)
}

/// Whether the file uses an enhanced (multi-frame) storage SOP class
///
/// Decided by the substring "Enhanced" in the SOP class UID's string form,
/// which covers dictionary-annotated renditions of the UID. `false` when
/// the field is absent.
pub fn is_enhanced_storage(path: &Path) -> Result<bool> {
    Ok(is_enhanced_storage_of(&read_dataset(path)?))
}

pub fn is_enhanced_storage_of(dataset: &DataSet) -> bool {
    find_first(dataset, SOP_CLASS_UID)
        .and_then(leaf_str)
        .map(|uid| uid.contains("Enhanced"))
        .unwrap_or(false)
}

/// Extracts every referenced SOP instance UID across the tree
pub fn referenced_sop_instance_uids(path: &Path) -> Result<Vec<String>> {
    Ok(referenced_sop_instance_uids_of(&read_dataset(path)?))
}

pub fn referenced_sop_instance_uids_of(dataset: &DataSet) -> Vec<String> {
    find_all(dataset, REFERENCED_SOP_INSTANCE_UID)
        .into_iter()
        .filter_map(leaf_str)
        .collect()
}

/// Extracts the GE raw-data run number (private tag), or `-1` when absent
pub fn raw_data_run_number(path: &Path) -> Result<i32> {
    Ok(raw_data_run_number_of(&read_dataset(path)?))
}

pub fn raw_data_run_number_of(dataset: &DataSet) -> i32 {
    find_first(dataset, GE_RAW_DATA_RUN_NUMBER)
        .and_then(leaf_int)
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturer_sanitization() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(MANUFACTURER, "General Electric");
        assert_eq!(manufacturer_of(&dataset), "General_Electric");
    }

    #[test]
    fn test_manufacturer_default() {
        assert_eq!(manufacturer_of(&DataSet::new()), "unknown");
    }

    #[test]
    fn test_model_and_protocol_sanitization() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(MANUFACTURER_MODEL_NAME, "Discovery MR750");
        dataset.put_leaf(PROTOCOL_NAME, "ep2d diff mddw");
        assert_eq!(manufacturer_model_of(&dataset), "Discovery_MR750");
        assert_eq!(protocol_name_of(&dataset), "ep2d_diff_mddw");
    }

    #[test]
    fn test_acquisition_date_default() {
        assert_eq!(acquisition_date_of(&DataSet::new()), "0");

        let mut dataset = DataSet::new();
        dataset.put_leaf(ACQUISITION_DATE, "20130214");
        assert_eq!(acquisition_date_of(&dataset), "20130214");
    }

    #[test]
    fn test_series_number_default() {
        assert_eq!(series_number_of(&DataSet::new()), "0");
    }

    #[test]
    fn test_instance_creation_time() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(INSTANCE_CREATION_TIME, "120134.5");
        assert_eq!(instance_creation_time_of(&dataset), Some(120134.5));
        assert_eq!(instance_creation_time_of(&DataSet::new()), None);
    }

    #[test]
    fn test_enhanced_storage_detection() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(
            SOP_CLASS_UID,
            "1.2.840.10008.5.1.4.1.1.4.1 (EnhancedMRImageStorage)",
        );
        assert!(is_enhanced_storage_of(&dataset));

        let mut dataset = DataSet::new();
        dataset.put_leaf(SOP_CLASS_UID, "1.2.840.10008.5.1.4.1.1.4");
        assert!(!is_enhanced_storage_of(&dataset));

        assert!(!is_enhanced_storage_of(&DataSet::new()));
    }

    #[test]
    fn test_referenced_uids_collected_from_sequences() {
        let mut item_a = DataSet::new();
        item_a.put_leaf(REFERENCED_SOP_INSTANCE_UID, "1.2.3");
        let mut item_b = DataSet::new();
        item_b.put_leaf(REFERENCED_SOP_INSTANCE_UID, "1.2.4");
        let mut root = DataSet::new();
        // ReferencedImageSequence
        root.put_sequence(dicom_core::Tag(0x0008, 0x1140), vec![item_a, item_b]);

        assert_eq!(
            referenced_sop_instance_uids_of(&root),
            vec!["1.2.3", "1.2.4"]
        );
        assert!(referenced_sop_instance_uids_of(&DataSet::new()).is_empty());
    }

    #[test]
    fn test_raw_data_run_number_default() {
        assert_eq!(raw_data_run_number_of(&DataSet::new()), -1);

        let mut dataset = DataSet::new();
        dataset.put_leaf(GE_RAW_DATA_RUN_NUMBER, 7);
        assert_eq!(raw_data_run_number_of(&dataset), 7);
    }
}
