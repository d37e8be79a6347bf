use std::collections::BTreeSet;
use std::env;

use anyhow::Result;

/// How a roster field's value is interpreted when looking for commonalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One value per person (name, school, role). Common when repeated
    /// within a group.
    Single,
    /// A comma-delimited list per person (interests). Common via
    /// intersection across the group, topped up with random picks.
    Multi,
}

/// Per-field classification table.
///
/// Which fields are multi-valued is configuration, not code: the table is
/// built from `Config` at startup and passed into the commonality engine.
/// Any field not listed as multi-valued is treated as `Single`.
#[derive(Debug, Clone)]
pub struct FieldTable {
    multi: BTreeSet<String>,
}

impl FieldTable {
    pub fn new<I, S>(multi_value_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            multi: multi_value_fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self, field: &str) -> FieldKind {
        if self.multi.contains(field) {
            FieldKind::Multi
        } else {
            FieldKind::Single
        }
    }
}

impl Default for FieldTable {
    /// Out of the box only `interests` is multi-valued.
    fn default() -> Self {
        Self::new(["interests"])
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default, so the CLI works with no environment at all.
pub struct Config {
    /// Field names treated as comma-delimited lists (MINGLE_MULTI_VALUE_FIELDS,
    /// itself comma-separated). Defaults to just "interests".
    pub multi_value_fields: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let multi_value_fields = match env::var("MINGLE_MULTI_VALUE_FIELDS") {
            Ok(raw) => raw
                .split(',')
                .map(|field| field.trim().to_string())
                .filter(|field| !field.is_empty())
                .collect(),
            Err(_) => vec!["interests".to_string()],
        };

        Ok(Self { multi_value_fields })
    }

    /// Build the per-field classification table for the commonality engine.
    pub fn field_table(&self) -> FieldTable {
        FieldTable::new(self.multi_value_fields.iter().cloned())
    }
}
