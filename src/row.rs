//! Rows and row identity.
//!
//! A [`Row`] is an opaque mapping of field name to [`Value`]. The table never
//! interprets row contents beyond the fields its columns name. Rendering
//! identity is not row position: it is the projection of the row onto the
//! caller-supplied key fields, so the same logical row keeps the same
//! [`RowKey`] no matter how sorting reorders the collection.

use std::collections::BTreeMap;
use std::fmt;

use crate::value::Value;

/// A single data row: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Look up a field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether the row has a value for the field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Project the row onto `keys` (in `keys` order) to form its rendering
    /// identity. Fields the row lacks are recorded as absent rather than
    /// skipped, so identities stay the same width across the collection.
    pub fn identity(&self, keys: &[String]) -> RowKey {
        RowKey(keys.iter().map(|k| self.fields.get(k).cloned()).collect())
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Stable rendering identity of a row: its key-field values in key order.
///
/// Two rows with equal key-field values are the same identity across
/// re-renders, even when sorting has moved them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey(Vec<Option<Value>>);

impl RowKey {
    /// The projected values, in key order. Absent fields are `None`.
    pub fn values(&self) -> &[Option<Value>] {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match segment {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("-")?,
            }
        }
        Ok(())
    }
}
