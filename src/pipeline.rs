// The matching pipeline: load -> partition -> annotate -> write.
//
// One-shot batch flow. Everything runs synchronously in partition order;
// the only state is what flows between stages.

use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::commonality;
use crate::config::FieldTable;
use crate::errors::MingleError;
use crate::grouping;
use crate::output::{self, AnnotatedGroup};
use crate::roster;

/// Run the full pipeline and return the annotated groups that were written.
///
/// The rng drives both the partition shuffle and the commonality engine's
/// fallback picks; callers inject it so a seeded source makes an entire run
/// reproducible.
pub fn run<R: Rng + ?Sized>(
    input: &Path,
    group_size: usize,
    output_path: &Path,
    fields: &FieldTable,
    rng: &mut R,
) -> Result<Vec<AnnotatedGroup>, MingleError> {
    let records = roster::load_roster(input)?;
    info!(people = records.len(), roster = %input.display(), "Loaded roster");

    let groups = grouping::partition(records, group_size, rng)?;
    info!(groups = groups.len(), group_size, "Partitioned roster");

    let mut annotated = Vec::with_capacity(groups.len());
    for group in groups {
        let common = commonality::annotate(&group, fields, rng)?;
        annotated.push(AnnotatedGroup::new(group, common));
    }

    output::write_document(output_path, &annotated)?;
    info!(output = %output_path.display(), "Wrote match document");

    Ok(annotated)
}
