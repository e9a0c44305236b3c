//! Stage sequencing for one pipeline run.
//!
//! The chain is strictly linear: connect → extract → transform → load, with
//! one short-circuit when the extraction comes back empty. Every failure
//! propagates as an [`EtlError`]; this module never exits the process, so the
//! stages stay testable in isolation and the binary alone owns exit codes.

use chrono::NaiveDate;
use tracing::info;

use crate::config::DbConfig;
use crate::errors::EtlError;
use crate::{db, extract, load, transform};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No book has a `last_updated` at or after the cutoff. Normal zero-work
    /// outcome, not an error.
    NothingToDo,
    /// Rows flowed through the whole chain.
    Loaded {
        /// Rows extracted from `books`.
        extracted: usize,
        /// Rows appended to `books_processed` (equal to `extracted`; the
        /// transform never filters).
        loaded: usize,
    },
}

/// Run the full pipeline once for the given cutoff date.
///
/// The connection is acquired here and dropped on every exit path, including
/// the empty-extraction short-circuit and each error return.
///
/// # Errors
/// Whichever stage fails first: [`EtlError::Connect`]/[`EtlError::Liveness`]
/// from the connector, [`EtlError::Extract`] from the extractor, or
/// [`EtlError::Load`] from the loader.
pub fn run(config: &DbConfig, cutoff: NaiveDate) -> Result<RunOutcome, EtlError> {
    let mut conn = db::connection::connect_postgres(config)?;

    let books = extract::extract_books(&mut conn, cutoff)?;
    if books.is_empty() {
        info!(cutoff = %cutoff, "no books updated since cutoff, nothing to process");
        return Ok(RunOutcome::NothingToDo);
    }

    let extracted = books.len();
    let processed = transform::transform_books(books);
    info!(count = processed.len(), "transformed rows");

    let loaded = load::load_processed(&mut conn, &processed)?;

    Ok(RunOutcome::Loaded { extracted, loaded })
}
