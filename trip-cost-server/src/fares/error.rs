//! Fare storage error types.

use std::path::PathBuf;

/// Errors raised by a [`FareStore`](super::FareStore) while answering a query.
#[derive(Debug, thiserror::Error)]
pub enum FareStoreError {
    /// A writer panicked while holding the table lock
    #[error("fare tables are unavailable: lock poisoned")]
    Poisoned,

    /// The backing store could not be reached
    #[error("fare store unavailable: {0}")]
    Unavailable(String),
}

/// Errors reading or writing the fare data files.
#[derive(Debug, thiserror::Error)]
pub enum FareDataError {
    /// Filesystem operation failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row parsed but holds an invalid fare
    #[error("invalid fare in {} at line {line}: {message}", path.display())]
    InvalidRow {
        path: PathBuf,
        line: u64,
        message: String,
    },
}
