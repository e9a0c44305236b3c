//! Extraction of source rows updated since the cutoff date.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;
use tracing::info;

use crate::errors::EtlError;
use crate::models::Book;

/// Midnight at the start of the cutoff date: the inclusive lower bound on
/// `last_updated`.
pub fn cutoff_start(cutoff: NaiveDate) -> NaiveDateTime {
    cutoff.and_time(NaiveTime::MIN)
}

/// Fetch every book with `last_updated >= cutoff` (midnight-inclusive),
/// newest first.
///
/// The cutoff is bound as a query parameter by the Diesel DSL, never
/// interpolated into SQL. An empty result is returned as an empty vec; the
/// caller decides that it means "nothing to do".
///
/// # Errors
/// [`EtlError::Extract`] if the query fails or a row cannot be decoded.
pub fn extract_books(conn: &mut PgConnection, cutoff: NaiveDate) -> Result<Vec<Book>, EtlError> {
    use crate::schema::books::dsl as b;

    let rows = b::books
        .filter(b::last_updated.ge(cutoff_start(cutoff)))
        .order(b::last_updated.desc())
        .select(Book::as_select())
        .load(conn)
        .map_err(EtlError::Extract)?;

    info!(count = rows.len(), cutoff = %cutoff, "extracted rows from books");
    Ok(rows)
}
