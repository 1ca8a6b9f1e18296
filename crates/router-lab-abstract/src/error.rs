use std::path::PathBuf;
use thiserror::Error;

/// Failures the simulator core can surface to its caller.
///
/// Both variants are recoverable: a run either completes with a report or
/// fails up front, never mid-computation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The trace source could not be opened or read. Distinct from a
    /// legitimately empty trace, which parses to zero packets and still
    /// produces a (degenerate) report.
    #[error("cannot read trace file {path}: {source}")]
    TraceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Engine preconditions violated: zero-packet buffer or non-positive
    /// link capacity.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
