//! Records and record collections returned by backends

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single record from a backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier of the backend that produced the record
    pub source_identifier: String,
    /// Record identifier, unique within its source
    pub unique_id: String,
    /// Backend-specific fields
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Create a record with no fields
    pub fn new(source_identifier: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Record {
            source_identifier: source_identifier.into(),
            unique_id: unique_id.into(),
            fields: Map::new(),
        }
    }

    /// Builder: set a field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Facet counts: field name to `(value, count)` pairs in backend order
pub type Facets = BTreeMap<String, Vec<(String, u64)>>;

/// A page of records plus the size of the full result set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordCollection {
    /// Total number of matching records across all pages
    pub total: u64,
    /// Zero-based offset of the first record in this page
    pub offset: u64,
    /// Records on this page
    pub records: Vec<Record>,
    /// Facet counts, empty when the backend returned none
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facets: Facets,
}

impl RecordCollection {
    /// Build a single-page collection whose total equals its length
    pub fn from_records(records: Vec<Record>) -> Self {
        RecordCollection {
            total: records.len() as u64,
            offset: 0,
            records,
            facets: Facets::new(),
        }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifiers of the records on this page, in order
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.unique_id.as_str()).collect()
    }

    /// Append another collection's records.
    ///
    /// Totals are summed; facets from `other` are dropped.
    pub fn extend(&mut self, other: RecordCollection) {
        self.total += other.total;
        self.records.extend(other.records);
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        RecordCollection::from_records(iter.into_iter().collect())
    }
}
