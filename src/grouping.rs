// Random partitioning of the roster into fixed-size groups.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::MingleError;
use crate::roster::Record;

/// Partition the roster into groups of `group_size`.
///
/// Applies a uniformly random permutation (Fisher-Yates via the injected
/// rng), then slices the shuffled roster into consecutive chunks. Every
/// group except possibly the last holds exactly `group_size` people; the
/// last holds the remainder when the roster doesn't divide evenly. No
/// person is dropped or duplicated.
///
/// The rng is injected rather than drawn from a global source so tests can
/// pass a seeded `StdRng` and fix the grouping.
pub fn partition<R: Rng + ?Sized>(
    mut records: Vec<Record>,
    group_size: usize,
    rng: &mut R,
) -> Result<Vec<Vec<Record>>, MingleError> {
    if group_size == 0 {
        return Err(MingleError::InvalidGroupSize(group_size));
    }

    records.shuffle(rng);

    Ok(records
        .chunks(group_size)
        .map(|chunk| chunk.to_vec())
        .collect())
}
