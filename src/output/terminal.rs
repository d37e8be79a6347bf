// Colored terminal summary of a matching run.
//
// This module handles all terminal-specific formatting. The JSON document
// is the machine contract; this is the human-facing recap printed after a
// successful run.

use colored::Colorize;

use super::{truncate_chars, AnnotatedGroup};

/// Display the matched groups as a table: one row per group with its size
/// and the shared attributes that seed conversation.
pub fn display_groups(groups: &[AnnotatedGroup]) {
    if groups.is_empty() {
        println!("No groups formed. The roster had no people in it.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Matched {} groups ===", groups.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>5}  {:>7}  {}",
        "Group".dimmed(),
        "Members".dimmed(),
        "In common".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, group) in groups.iter().enumerate() {
        let shared = if group.common_attributes.is_empty() {
            "(nothing found)".dimmed().to_string()
        } else {
            truncate_chars(&group.common_attributes.join(", "), 52)
        };

        println!("  {:>5}  {:>7}  {}", i + 1, group.matches.len(), shared);
    }

    println!();

    // Summary line
    let people: usize = groups.iter().map(|g| g.matches.len()).sum();
    let with_shared = groups
        .iter()
        .filter(|g| !g.common_attributes.is_empty())
        .count();
    println!(
        "  {} people in {} groups, {} groups with shared attributes",
        people,
        groups.len(),
        with_shared
    );
}
