// Output — the JSON match document and the terminal summary.

pub mod terminal;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::commonality::CommonSet;
use crate::errors::MingleError;
use crate::roster::Record;

/// One matched group, ready for rendering.
///
/// This shape is the contract with the rendering service that fetches the
/// document over HTTP: `matches` holds the group's raw records exactly as
/// loaded, `common_attributes` the normalized commonality strings. Field
/// declaration order is alphabetical so the pretty-printed JSON comes out
/// with sorted keys at every level (records are BTreeMap-backed).
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedGroup {
    pub common_attributes: Vec<String>,
    pub matches: Vec<Record>,
}

impl AnnotatedGroup {
    pub fn new(matches: Vec<Record>, common: CommonSet) -> Self {
        Self {
            common_attributes: common.into_sorted_vec(),
            matches,
        }
    }
}

/// Serialize the full run to pretty-printed JSON.
///
/// Purely structural: keys sorted, groups in partition order, no
/// computation. Serializing the same groups twice yields identical bytes.
pub fn to_json(groups: &[AnnotatedGroup]) -> Result<String, MingleError> {
    Ok(serde_json::to_string_pretty(groups)?)
}

/// Write the match document atomically.
///
/// Serializes to a sibling temp file and renames it over the target, so a
/// failure mid-write never leaves a partial document behind.
pub fn write_document(path: &Path, groups: &[AnnotatedGroup]) -> Result<(), MingleError> {
    let json = to_json(groups)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Truncate a string to at most `max_chars` characters, appending "..." if
/// truncated. Respects UTF-8 character boundaries, so it never panics on
/// multi-byte characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
