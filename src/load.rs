//! Chunked append into the destination table.

use diesel::prelude::*;
use tracing::info;

use crate::errors::EtlError;
use crate::models::ProcessedBook;
use crate::schema::books_processed;

/// Rows per INSERT statement. Bounds statement size for large batches.
pub const WRITE_CHUNK_SIZE: usize = 1000;

/// Append every processed row to `books_processed` in chunks of
/// [`WRITE_CHUNK_SIZE`].
///
/// Inserts only; the destination is never updated or truncated. Each chunk
/// commits independently, so a failure leaves earlier chunks in place — the
/// error reports how many rows were already written so the operator knows
/// the partial state.
///
/// # Errors
/// [`EtlError::Load`] on the first failing chunk.
pub fn load_processed(conn: &mut PgConnection, rows: &[ProcessedBook]) -> Result<usize, EtlError> {
    let mut written = 0;

    for chunk in rows.chunks(WRITE_CHUNK_SIZE) {
        let inserted = diesel::insert_into(books_processed::table)
            .values(chunk)
            .execute(conn)
            .map_err(|source| EtlError::Load { written, source })?;
        written += inserted;
    }

    info!(count = written, "appended rows to books_processed");
    Ok(written)
}
