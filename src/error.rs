use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort the pipeline.
///
/// The run is a single offline batch over a trusted snapshot, so every
/// variant is fatal: no retries, no partial-result degradation. The kinds
/// exist so the failing stage is identifiable from the message alone.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file's bytes are invalid under the declared encoding.
    #[error("{} contains byte sequences invalid under {encoding}", path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Structurally malformed CSV (e.g. a row wider than the header).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header does not match the known original schema.
    #[error("unexpected column at position {position}: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    /// A cell expected to coerce to an integer did not.
    #[error("row {row}, column {column:?}: {value:?} is not a valid integer")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },
}
