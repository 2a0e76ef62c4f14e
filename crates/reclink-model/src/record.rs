//! Record access for comparison.
//!
//! A matcher never looks at how a record is stored. It only asks for a field
//! by name and gets back the value, or `None` when the record does not carry
//! that field. A present empty string is still a present value.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

/// Read access to the fields of a record.
///
/// Implementations must be pure lookups: no side effects, no panics for
/// unknown field names, and safe to call from any number of threads.
pub trait Comparable {
    /// Returns the value of `name`, or `None` if the field is absent.
    fn get_field(&self, name: &str) -> Option<&str>;
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn get_field(&self, name: &str) -> Option<&str> {
        (**self).get_field(name)
    }
}

impl<S: BuildHasher> Comparable for HashMap<String, String, S> {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Comparable for BTreeMap<String, String> {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A record backed by a field-name to value map.
///
/// Serializes as a flat JSON object of strings, so a patient record such as
/// `{"fname": "Katy", "dob": "1980-10-04"}` deserializes directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapRecord {
    fields: BTreeMap<String, String>,
}

impl MapRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Remove a field, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields as `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Comparable for MapRecord {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl From<BTreeMap<String, String>> for MapRecord {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for MapRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_field_is_none() {
        let record = MapRecord::new().with_field("dob", "1980-10-04");
        assert_eq!(record.get_field("dob"), Some("1980-10-04"));
        assert_eq!(record.get_field("ssn"), None);
    }

    #[test]
    fn empty_string_is_present() {
        let record = MapRecord::new().with_field("ssn", "");
        assert_eq!(record.get_field("ssn"), Some(""));
    }

    #[test]
    fn lookup_is_case_sensitive_on_names() {
        let record = MapRecord::new().with_field("fname", "Katy");
        assert_eq!(record.get_field("FNAME"), None);
    }

    #[test]
    fn insert_replaces_value() {
        let mut record = MapRecord::new();
        assert_eq!(record.insert("lname", "Lang"), None);
        assert_eq!(record.insert("lname", "Long"), Some("Lang".to_string()));
        assert_eq!(record.len(), 1);
        assert_eq!(record.remove("lname"), Some("Long".to_string()));
        assert!(record.is_empty());
    }
}
