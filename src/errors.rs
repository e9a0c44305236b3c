//! The unified error type for a pipeline run.
//!
//! Every stage returns `Result<_, EtlError>`; the binary is the only place
//! that turns one of these into a process exit code.

use thiserror::Error;

use crate::config::ConfigError;

/// A failure in one of the pipeline stages.
///
/// Variants are keyed by stage so the top-level handler can report which part
/// of the run failed without string matching.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Configuration could not be assembled from the environment.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Establishing the database connection failed (network, auth, bad URL).
    #[error("database connection failed: {0}")]
    Connect(#[from] diesel::ConnectionError),

    /// The connection opened but the `SELECT 1` liveness probe failed.
    #[error("database liveness check failed: {0}")]
    Liveness(#[source] diesel::result::Error),

    /// The extraction query failed, or a row could not be decoded.
    #[error("extract from books failed: {0}")]
    Extract(#[source] diesel::result::Error),

    /// An insert chunk failed. Earlier chunks stay committed; `written` is
    /// how many rows made it in before the failure.
    #[error("load into books_processed failed after {written} rows: {source}")]
    Load {
        /// Rows committed by chunks that succeeded before the failure.
        written: usize,
        /// The underlying Diesel error.
        #[source]
        source: diesel::result::Error,
    },
}
