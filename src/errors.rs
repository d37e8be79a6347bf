use std::io;

use thiserror::Error;

/// Failure taxonomy for the matching pipeline.
///
/// Every variant is fatal: mingle is a one-shot batch tool, so any failure
/// aborts the run and surfaces a message. There are no retries. Wrong CLI
/// arity never reaches this type; clap rejects it with a usage message and
/// its own exit status before any work starts.
#[derive(Debug, Error)]
pub enum MingleError {
    /// The roster file is missing, unreadable, has no header row, or has a
    /// data row whose field count disagrees with the header.
    #[error("malformed roster: {0}")]
    MalformedRoster(String),

    /// A zero group size reached the partitioner.
    #[error("group size must be at least 1 (got {0})")]
    InvalidGroupSize(usize),

    /// An empty group reached the commonality engine. A correct partitioner
    /// never produces one, so this indicates a defect upstream.
    #[error("cannot compute commonalities for an empty group")]
    EmptyGroup,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to serialize match document: {0}")]
    Serialize(#[from] serde_json::Error),
}
