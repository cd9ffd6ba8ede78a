use std::path::Path;

use crate::decoder::read_dataset;
use crate::error::Result;
use crate::extraction::{acquisition, geometry, identifiers};
use crate::tree::DataSet;

/// Main extractor for scan acquisition metadata
///
/// Gathers every tag-tree field in one pass over an already-parsed
/// [`DataSet`], so a file is decoded once no matter how many fields the
/// caller needs. The Philips `dcmdump` fallback is deliberately not part
/// of the aggregate because it spawns a subprocess; use
/// [`crate::extraction::philips_stack_slices`] for that one field.
///
/// # Example
///
/// ```
/// use dcmeta_core::{DataSet, ScanExtractor};
/// use dicom_core::Tag;
///
/// let mut dataset = DataSet::new();
/// dataset.put_leaf(Tag(0x0008, 0x0070), "General Electric");
/// dataset.put_leaf(Tag(0x0018, 0x0080), 500.0);
///
/// let metadata = ScanExtractor::extract(&dataset);
/// assert_eq!(metadata.manufacturer, "General_Electric");
/// assert_eq!(metadata.repetition_time_ms.as_deref(), Some("500000"));
/// assert_eq!(metadata.number_of_slices, 0);
/// ```
pub struct ScanExtractor;

impl ScanExtractor {
    /// Extracts all metadata fields from a parsed dataset
    ///
    /// Never fails: every field resolves to its documented default when
    /// absent from the tree.
    pub fn extract(dataset: &DataSet) -> ScanMetadata {
        ScanMetadata {
            manufacturer: identifiers::manufacturer_of(dataset),
            model: identifiers::manufacturer_model_of(dataset),
            protocol: identifiers::protocol_name_of(dataset),
            sequence_name: identifiers::sequence_name_of(dataset),
            sop_instance_uid: identifiers::sop_instance_uid_of(dataset),
            series_instance_uid: identifiers::series_instance_uid_of(dataset),
            series_number: identifiers::series_number_of(dataset),
            acquisition_date: identifiers::acquisition_date_of(dataset),
            instance_creation_time: identifiers::instance_creation_time_of(dataset),
            enhanced_storage: identifiers::is_enhanced_storage_of(dataset),
            referenced_sop_instance_uids: identifiers::referenced_sop_instance_uids_of(dataset),
            raw_data_run_number: identifiers::raw_data_run_number_of(dataset),
            repetition_time_ms: acquisition::repetition_time_of(dataset),
            echo_time: acquisition::echo_time_of(dataset),
            phase_encoding: acquisition::phase_encoding_of(dataset),
            b_values: acquisition::b_values_of(dataset),
            b_vectors: acquisition::b_vectors_of(dataset),
            number_of_slices: geometry::number_of_slices_of(dataset),
            temporal_positions: geometry::number_of_temporal_positions_of(dataset),
        }
    }

    /// Decodes the file and extracts all metadata fields
    ///
    /// # Errors
    ///
    /// Returns an error only when the file cannot be decoded at all, even
    /// with the permissive headerless retry.
    pub fn extract_from_file(path: &Path) -> Result<ScanMetadata> {
        Ok(Self::extract(&read_dataset(path)?))
    }
}

/// Extracted scan acquisition metadata
///
/// Absent fields carry their per-field sentinel (`"unknown"`, `"0"`, `-1`,
/// `None`, `false` or an empty list) instead of signalling an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ScanMetadata {
    /// Manufacturer name, spaces replaced by underscores
    pub manufacturer: String,

    /// Manufacturer model name, spaces replaced by underscores
    pub model: String,

    /// Protocol name, spaces replaced by underscores
    pub protocol: String,

    /// Sequence (series description) name, spaces replaced by underscores
    pub sequence_name: String,

    /// SOP instance UID
    pub sop_instance_uid: String,

    /// Series instance UID
    pub series_instance_uid: String,

    /// Series number as written in the file
    pub series_number: String,

    /// Acquisition date, `"0"` when absent
    pub acquisition_date: String,

    /// Instance creation time as a number
    pub instance_creation_time: Option<f64>,

    /// Whether the SOP class is an enhanced (multi-frame) storage class
    pub enhanced_storage: bool,

    /// All referenced SOP instance UIDs found anywhere in the tree
    pub referenced_sop_instance_uids: Vec<String>,

    /// GE raw-data run number, `-1` when absent
    pub raw_data_run_number: i32,

    /// Repetition time normalized to milliseconds
    pub repetition_time_ms: Option<String>,

    /// Echo time, `-1` when absent
    pub echo_time: f64,

    /// Phase encoding direction ("ROW" or "COL")
    pub phase_encoding: Option<String>,

    /// Diffusion b-values, one per frame for enhanced storage
    pub b_values: Vec<f64>,

    /// Diffusion gradient orientations, one per frame
    pub b_vectors: Vec<Vec<f64>>,

    /// Number of slices, `0` when absent
    pub number_of_slices: i32,

    /// Number of temporal positions (volumes), `0` when absent
    pub temporal_positions: i32,
}

impl ScanMetadata {
    /// Whether the scan carries diffusion acquisition fields
    pub fn is_diffusion(&self) -> bool {
        !self.b_values.is_empty()
    }

    /// Whether the scan is a time series (more than one volume)
    pub fn is_time_series(&self) -> bool {
        self.temporal_positions > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tags::{
        DIFFUSION_B_VALUE, MANUFACTURER, NUMBER_OF_TEMPORAL_POSITIONS, REPETITION_TIME,
        SOP_CLASS_UID,
    };
    use dicom_core::Tag;

    #[test]
    fn test_extract_defaults_on_empty_dataset() {
        let metadata = ScanExtractor::extract(&DataSet::new());

        assert_eq!(metadata.manufacturer, "unknown");
        assert_eq!(metadata.model, "unknown");
        assert_eq!(metadata.acquisition_date, "0");
        assert_eq!(metadata.series_number, "0");
        assert_eq!(metadata.instance_creation_time, None);
        assert!(!metadata.enhanced_storage);
        assert_eq!(metadata.raw_data_run_number, -1);
        assert_eq!(metadata.repetition_time_ms, None);
        assert_eq!(metadata.echo_time, -1.0);
        assert_eq!(metadata.number_of_slices, 0);
        assert_eq!(metadata.temporal_positions, 0);
        assert!(metadata.b_values.is_empty());
        assert!(!metadata.is_diffusion());
        assert!(!metadata.is_time_series());
    }

    #[test]
    fn test_extract_enhanced_diffusion_scan() {
        let mut diffusion = DataSet::new();
        diffusion.put_leaf(DIFFUSION_B_VALUE, 1000.0);
        let mut frame = DataSet::new();
        frame.put_sequence(Tag(0x0018, 0x9117), vec![diffusion]);

        let mut root = DataSet::new();
        root.put_leaf(MANUFACTURER, "General Electric");
        root.put_leaf(REPETITION_TIME, 500.0);
        root.put_leaf(NUMBER_OF_TEMPORAL_POSITIONS, 4);
        root.put_leaf(
            SOP_CLASS_UID,
            "1.2.840.10008.5.1.4.1.1.4.1 (EnhancedMRImageStorage)",
        );
        root.put_sequence(Tag(0x5200, 0x9230), vec![frame]);

        let metadata = ScanExtractor::extract(&root);
        assert_eq!(metadata.manufacturer, "General_Electric");
        assert_eq!(metadata.repetition_time_ms.as_deref(), Some("500000"));
        assert!(metadata.enhanced_storage);
        assert_eq!(metadata.b_values, vec![1000.0]);
        assert!(metadata.is_diffusion());
        assert!(metadata.is_time_series());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let mut dataset = DataSet::new();
        dataset.put_leaf(MANUFACTURER, "Philips Medical Systems");
        dataset.put_leaf(REPETITION_TIME, 2000.0);

        let first = ScanExtractor::extract(&dataset);
        let second = ScanExtractor::extract(&dataset);
        assert_eq!(first, second);
    }
}
