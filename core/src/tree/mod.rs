pub mod walk;

use std::collections::BTreeMap;

use dicom_core::header::Header;
use dicom_core::value::{PrimitiveValue, Value};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

/// One dataset or sequence item: an ordered-by-tag map of fields.
///
/// This is the navigable form every extractor works against. It is built
/// once from a decoded DICOM object and never mutated afterwards. Enhanced
/// multi-frame files nest whole sub-datasets inside sequence fields, so a
/// `DataSet` is recursive: a sequence-valued field holds one child
/// `DataSet` per item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    fields: BTreeMap<Tag, FieldValue>,
}

/// The value of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A scalar or array leaf value
    Leaf(PrimitiveValue),
    /// A sequence of nested sub-datasets, one per item
    Sequence(Vec<DataSet>),
}

impl DataSet {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a decoded in-memory DICOM object into a tag tree
    ///
    /// Sequence elements become nested `DataSet` items; everything else is
    /// kept as its primitive value. Encapsulated pixel data is skipped, as
    /// pixel interpretation is out of scope for metadata extraction.
    pub fn from_object(obj: &InMemDicomObject) -> Self {
        let mut fields = BTreeMap::new();
        for elem in obj {
            let value = match elem.value() {
                Value::Primitive(v) => FieldValue::Leaf(v.clone()),
                Value::Sequence(seq) => FieldValue::Sequence(
                    seq.items().iter().map(DataSet::from_object).collect(),
                ),
                Value::PixelSequence(_) => continue,
            };
            fields.insert(elem.tag(), value);
        }
        Self { fields }
    }

    /// Iterates the fields in ascending tag order
    pub fn fields(&self) -> impl Iterator<Item = (&Tag, &FieldValue)> {
        self.fields.iter()
    }

    /// Looks up a direct field of this dataset (no recursion)
    pub fn get(&self, tag: Tag) -> Option<&FieldValue> {
        self.fields.get(&tag)
    }

    /// Number of direct fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this dataset has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Inserts a leaf field, replacing any previous value under the tag
    pub fn put_leaf(&mut self, tag: Tag, value: impl Into<PrimitiveValue>) {
        self.fields.insert(tag, FieldValue::Leaf(value.into()));
    }

    /// Inserts a sequence field, replacing any previous value under the tag
    pub fn put_sequence(&mut self, tag: Tag, items: Vec<DataSet>) {
        self.fields.insert(tag, FieldValue::Sequence(items));
    }
}

impl From<&InMemDicomObject> for DataSet {
    fn from(obj: &InMemDicomObject) -> Self {
        DataSet::from_object(obj)
    }
}

impl FieldValue {
    /// Returns the leaf value, or `None` for sequences
    pub fn as_leaf(&self) -> Option<&PrimitiveValue> {
        match self {
            FieldValue::Leaf(v) => Some(v),
            FieldValue::Sequence(_) => None,
        }
    }

    /// Returns the sequence items, or `None` for leaves
    pub fn as_sequence(&self) -> Option<&[DataSet]> {
        match self {
            FieldValue::Leaf(_) => None,
            FieldValue::Sequence(items) => Some(items),
        }
    }
}
