//! Structural merge over settable key-value targets.
//!
//! A target is anything implementing [`MergeTarget`]. Two adapters cover the
//! value model: [`MapTarget`] assigns mapping items and [`FieldTarget`]
//! assigns named fields on a record. [`merge`] picks the adapter from the
//! target's variant.

use std::collections::BTreeMap;
use tern_core::{PalError, RecordValue, Value};

/// A target that accepts key-value assignment.
pub trait MergeTarget {
    fn set_entry(&mut self, key: &str, value: Value);
}

/// Item assignment on a mapping.
pub struct MapTarget<'a>(pub &'a mut BTreeMap<String, Value>);

/// Named-field assignment on a record.
pub struct FieldTarget<'a>(pub &'a mut RecordValue);

impl MergeTarget for MapTarget<'_> {
    fn set_entry(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }
}

impl MergeTarget for FieldTarget<'_> {
    fn set_entry(&mut self, key: &str, value: Value) {
        self.0.set(key, value);
    }
}

/// Copy every entry of `source` onto `target`. Keys present only on the
/// target are left alone.
pub fn merge_into<T: MergeTarget + ?Sized>(target: &mut T, source: &Value) -> Result<(), PalError> {
    let entries = source.entries().ok_or_else(|| {
        PalError::type_error(format!(
            "merge source must be a dict or record, got {}",
            source.kind()
        ))
    })?;
    for (key, value) in entries {
        target.set_entry(key, value.clone());
    }
    Ok(())
}

pub fn merge(target: &mut Value, source: &Value) -> Result<(), PalError> {
    match target {
        Value::Map(map) => merge_into(&mut MapTarget(map), source),
        Value::Record(record) => merge_into(&mut FieldTarget(record), source),
        other => Err(PalError::type_error(format!(
            "merge target supports neither item nor attribute assignment: {}",
            other.kind()
        ))),
    }
}
