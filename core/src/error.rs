use thiserror::Error;

/// Result type for dcmeta operations
pub type Result<T> = std::result::Result<T, DcmetaError>;

/// Error types for dcmeta operations
#[derive(Error, Debug)]
pub enum DcmetaError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// Generic extraction error
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for DcmetaError {
    fn from(s: String) -> Self {
        DcmetaError::ExtractionError(s)
    }
}

impl From<&str> for DcmetaError {
    fn from(s: &str) -> Self {
        DcmetaError::ExtractionError(s.to_string())
    }
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for DcmetaError {
    fn from(e: dicom_object::ReadError) -> Self {
        DcmetaError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for DcmetaError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        DcmetaError::InvalidValue(format!("{}", e))
    }
}
