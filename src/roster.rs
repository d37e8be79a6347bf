// Roster loading — CSV file in, uniform string records out.
//
// The header row names the fields; every subsequent row is one person. No
// type coercion happens here: every value stays a string, including the
// comma-delimited interests list (splitting that is the commonality
// engine's job).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::MingleError;

/// One person from the roster: a field-name to string-value mapping covering
/// every field named in the header.
///
/// Backed by a BTreeMap so the JSON object for a person always serializes
/// with its keys in alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Build a record from (field, value) pairs. Mostly useful in tests.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The raw (non-normalized) value for a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Field names in this record, in alphabetical order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Load the full roster from a CSV file.
///
/// Returns the records in file order. Any structural problem is fatal:
/// a missing or unreadable file, an empty file (no header row), or a data
/// row whose field count disagrees with the header. The csv reader runs
/// with strict row lengths, so ragged rows surface as errors rather than
/// silently truncated records.
pub fn load_roster(path: &Path) -> Result<Vec<Record>, MingleError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| MingleError::MalformedRoster(format!("{}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| MingleError::MalformedRoster(e.to_string()))?
        .clone();

    if headers.is_empty() {
        return Err(MingleError::MalformedRoster(format!(
            "{}: no header row",
            path.display()
        )));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| MingleError::MalformedRoster(e.to_string()))?;
        let fields: BTreeMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        records.push(Record { fields });
    }

    Ok(records)
}
