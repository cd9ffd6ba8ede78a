use dicom_core::Tag;

use crate::tree::FieldValue;

// Acquisition Tags
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
pub const PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);

// Diffusion Tags (per-frame in enhanced storage)
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);

// Identification Tags
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);

// Geometry Tags
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
pub const NUMBER_OF_SLICES: Tag = Tag(0x0020, 0x1002);

// Vendor-Private Tags
pub const GE_RAW_DATA_RUN_NUMBER: Tag = Tag(0x0019, 0x10A2);
pub const PHILIPS_NUMBER_OF_SLICES: Tag = Tag(0x2001, 0x1018);

/// Helper to read a matched field as a trimmed string
///
/// Returns `None` if the match is a sequence rather than a leaf
pub fn leaf_str(value: &FieldValue) -> Option<String> {
    value.as_leaf().map(|v| v.to_str().trim().to_string())
}

/// Helper to read a matched field as an i32
///
/// Returns `None` for sequences and for leaves that cannot be converted
pub fn leaf_int(value: &FieldValue) -> Option<i32> {
    value.as_leaf().and_then(|v| v.to_int::<i32>().ok())
}

/// Helper to read a matched field as an f64
///
/// Returns `None` for sequences and for leaves that cannot be converted
pub fn leaf_f64(value: &FieldValue) -> Option<f64> {
    value.as_leaf().and_then(|v| v.to_float64().ok())
}

/// Helper to read a matched field as a vector of f64
///
/// Returns `None` for sequences and for leaves that cannot be converted
pub fn leaf_multi_f64(value: &FieldValue) -> Option<Vec<f64>> {
    value.as_leaf().and_then(|v| v.to_multi_float64().ok())
}
