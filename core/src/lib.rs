pub mod api;
pub mod cli;
pub mod decoder;
pub mod error;
pub mod extraction;
pub mod tree;

pub use api::{ScanExtractor, ScanMetadata};
pub use cli::report::TextReport;
pub use decoder::read_dataset;
pub use error::{DcmetaError, Result};
pub use tree::{DataSet, FieldValue};
