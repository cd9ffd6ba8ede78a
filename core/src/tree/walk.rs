//! Recursive tag search over a [`DataSet`].
//!
//! Enhanced storage presents a single object whose acquisition fields live
//! inside repeated per-frame sub-sequences, so a flat lookup misses them.
//! The walk visits fields in ascending tag order and descends into sequence
//! items depth-first, which makes the result reproducible for any given
//! tree regardless of how it was assembled.

use dicom_core::Tag;

use super::{DataSet, FieldValue};

/// Finds the first field with the given tag anywhere in the subtree.
///
/// Fields are visited in ascending tag order; non-matching sequence fields
/// are searched item by item before moving on to the next sibling. The walk
/// stops at the first match, so siblings and deeper items after it are never
/// visited. Returns `None` when the tag occurs nowhere in the tree; a
/// present field always yields `Some`, even when its value is empty or zero.
pub fn find_first<'a>(dataset: &'a DataSet, tag: Tag) -> Option<&'a FieldValue> {
    for (field_tag, value) in dataset.fields() {
        if *field_tag == tag {
            return Some(value);
        }
        if let FieldValue::Sequence(items) = value {
            for item in items {
                if let Some(found) = find_first(item, tag) {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// Collects every field with the given tag across the whole subtree.
///
/// Matches are returned in the same depth-first, tag-sorted order that
/// [`find_first`] walks in, so the first entry of a non-empty result equals
/// the `find_first` result. A matching field that is itself a sequence is
/// taken as a terminal match: its items are not searched further.
pub fn find_all<'a>(dataset: &'a DataSet, tag: Tag) -> Vec<&'a FieldValue> {
    let mut matches = Vec::new();
    collect_into(dataset, tag, &mut matches);
    matches
}

fn collect_into<'a>(dataset: &'a DataSet, tag: Tag, matches: &mut Vec<&'a FieldValue>) {
    for (field_tag, value) in dataset.fields() {
        if *field_tag == tag {
            matches.push(value);
        } else if let FieldValue::Sequence(items) = value {
            for item in items {
                collect_into(item, tag, matches);
            }
        }
    }
}
