// Commonality extraction — what does a matched group have in common?
//
// Two tracks, selected by the field classification table:
// - Multi-valued fields (interests): intersect the normalized token sets of
//   every member. If the intersection can't fill the target count, top up
//   with random picks from the union so the group always has something to
//   talk about.
// - Single-valued fields (school, role, ...): a normalized value that shows
//   up two or more times within the group is common.
//
// Comparisons are case-insensitive and whitespace-trimmed. The raw values
// stay untouched in the group's records; only the commonality set holds
// normalized strings.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::config::{FieldKind, FieldTable};
use crate::errors::MingleError;
use crate::roster::Record;

/// Target number of common attributes per group for the multi-valued track.
/// When the true intersection falls short, random union picks fill the gap.
/// A fixed design constant, deliberately not configuration.
pub const DESIRED_COMMON_COUNT: usize = 5;

/// Normalize a value for comparison: trim surrounding whitespace, lowercase.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// The group's common attributes: ordered, duplicate-free, and never
/// containing the empty string.
///
/// Dedup and empty-string exclusion live in `insert` itself, so no caller
/// needs a cleanup pass and no code path can violate the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonSet {
    entries: BTreeSet<String>,
}

impl CommonSet {
    /// Insert a normalized attribute. Empty strings are refused (an empty
    /// roster cell repeated across a group is not a commonality).
    /// Returns true if the set grew.
    pub fn insert(&mut self, value: String) -> bool {
        if value.is_empty() {
            return false;
        }
        self.entries.insert(value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Consume the set into a sorted Vec for serialization.
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.entries.into_iter().collect()
    }
}

/// Compute the common attributes for one group.
///
/// The field list is read off the first member (the loader guarantees every
/// record covers the same header fields), which is why an empty group is a
/// contract violation rather than an empty result.
pub fn annotate<R: Rng + ?Sized>(
    group: &[Record],
    fields: &FieldTable,
    rng: &mut R,
) -> Result<CommonSet, MingleError> {
    let first = group.first().ok_or(MingleError::EmptyGroup)?;

    let mut common = CommonSet::default();

    // Values of single-valued fields, accumulated per field so repetition
    // can be counted across the whole group afterwards.
    let mut single_values: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for field in first.field_names() {
        match fields.kind(field) {
            FieldKind::Multi => {
                let token_sets = member_token_sets(group, field);
                let intersection = intersect_all(&token_sets);

                // Candidate pool: every token anyone holds, minus the
                // intersection that's about to be added outright.
                let mut pool: Vec<String> = token_sets
                    .iter()
                    .flatten()
                    .filter(|token| !intersection.contains(*token))
                    .cloned()
                    .collect::<BTreeSet<String>>()
                    .into_iter()
                    .collect();

                // Everything universally shared is common, no cap.
                for token in intersection {
                    common.insert(token);
                }

                // Top up with random picks until the target count is hit or
                // the pool runs dry. The pool Vec is sorted (built from a
                // BTreeSet), so a seeded rng fully determines the picks.
                while !pool.is_empty() && common.len() < DESIRED_COMMON_COUNT {
                    let idx = rng.random_range(0..pool.len());
                    common.insert(pool.swap_remove(idx));
                }
            }
            FieldKind::Single => {
                let values = group
                    .iter()
                    .map(|person| normalize(person.get(field).unwrap_or("")))
                    .collect();
                single_values.insert(field, values);
            }
        }
    }

    // A single-valued field's normalized value is common when it occurs two
    // or more times within the group. CommonSet dedups across fields.
    for values in single_values.values() {
        for value in values {
            if values.iter().filter(|other| *other == value).count() >= 2 {
                common.insert(value.clone());
            }
        }
    }

    Ok(common)
}

/// Split and normalize the multi-valued field for every member of the group.
fn member_token_sets(group: &[Record], field: &str) -> Vec<BTreeSet<String>> {
    group
        .iter()
        .map(|person| {
            person
                .get(field)
                .unwrap_or("")
                .split(',')
                .map(normalize)
                .collect()
        })
        .collect()
}

/// Tokens present in every member's set.
fn intersect_all(sets: &[BTreeSet<String>]) -> BTreeSet<String> {
    let mut iter = sets.iter();
    let Some(first) = iter.next() else {
        return BTreeSet::new();
    };
    iter.fold(first.clone(), |acc, set| {
        acc.intersection(set).cloned().collect()
    })
}
