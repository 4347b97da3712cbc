//! Data model shared by the extraction and viewing pipelines.

use serde::Serialize;
use serde_json::{Map, Value};

/// Sentinel name for unparsed parameters without a recoverable `"name":`.
pub const UNKNOWN_PARAMETER: &str = "Unknown Parameter";

/// One `dbid` entity reconstructed from a property dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRecord {
    /// Numeric token from the `"dbid":` declaration
    pub id: String,
    /// `"type"` value (category label)
    pub kind: Option<String>,
    pub title: Option<String>,
    pub syntax: Option<String>,
    /// Trimmed `"level": "INTERNAL"` lines, in source order
    pub parameters: Vec<String>,
}

impl IdentifierRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Read-only set of records loaded from the persisted XML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTree {
    pub records: Vec<IdentifierRecord>,
}

impl RecordTree {
    /// First record whose id matches exactly.
    pub fn find(&self, id: &str) -> Option<&IdentifierRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// User-facing projection of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub id: String,
    pub title: String,
    pub syntax: Option<String>,
}

/// A parameter whose repaired text was not a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsedParameter {
    pub name: String,
    pub value: String,
}

/// Parameters of one record grouped by their `role` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterBuckets {
    pub source: Vec<Map<String, Value>>,
    pub target: Vec<Map<String, Value>>,
    pub other: Vec<Map<String, Value>>,
    pub unparsed: Vec<UnparsedParameter>,
}

impl ParameterBuckets {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
            && self.target.is_empty()
            && self.other.is_empty()
            && self.unparsed.is_empty()
    }
}
