use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dicom_object::{open_file, InMemDicomObject};
use dicom_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN;
use log::debug;

use crate::error::Result;
use crate::tree::DataSet;

/// Reads a DICOM file into a [`DataSet`] tag tree.
///
/// Acquisition exports sometimes lack the standard 128-byte preamble and
/// file meta group, so a failed standard read is retried as a bare dataset
/// in implicit VR little endian before giving up. Only when both attempts
/// fail is the read error propagated to the caller.
pub fn read_dataset(path: &Path) -> Result<DataSet> {
    match open_file(path) {
        Ok(obj) => Ok(DataSet::from_object(&obj)),
        Err(err) => {
            debug!(
                "standard read of {} failed ({}), retrying as headerless dataset",
                path.display(),
                err
            );
            read_headerless(path)
        }
    }
}

fn read_headerless(path: &Path) -> Result<DataSet> {
    let source = BufReader::new(File::open(path)?);
    let ts = IMPLICIT_VR_LITTLE_ENDIAN.erased();
    let obj = InMemDicomObject::read_dataset_with_ts(source, &ts)?;
    Ok(DataSet::from_object(&obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
    use std::io::Write;

    #[test]
    fn test_read_headerless_dataset() {
        // a raw dataset without preamble or file meta group
        let obj = InMemDicomObject::from_element_iter([DataElement::new(
            Tag(0x0008, 0x0070),
            VR::LO,
            PrimitiveValue::from("Acme"),
        )]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let ts = IMPLICIT_VR_LITTLE_ENDIAN.erased();
        obj.write_dataset_with_ts(file.as_file_mut(), &ts).unwrap();
        file.flush().unwrap();

        let dataset = read_dataset(file.path()).unwrap();
        let value = dataset.get(Tag(0x0008, 0x0070)).unwrap();
        assert_eq!(value.as_leaf().unwrap().to_str().as_ref(), "Acme");
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        assert!(read_dataset(Path::new("/no/such/file.dcm")).is_err());
    }
}
