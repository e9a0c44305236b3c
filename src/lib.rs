//! Append-only batch ETL from the `books` table to `books_processed`.
//!
//! One run of the pipeline is a strictly sequential chain:
//! connect → extract → transform → load. The binary (`books-etl`) takes a
//! single `YYYY-MM-DD` cutoff argument; every row whose `last_updated` falls
//! on or after midnight of that date is extracted, derived into a processed
//! row, and appended to the destination table in fixed-size chunks.
//!
//! Re-running with an overlapping cutoff duplicates destination rows by
//! design: `books_processed` is an event log of transformation outputs, not a
//! deduplicated table.
//!
//! Stage functions return `Result` and never terminate the process; only the
//! binary maps failures to exit codes.

#![deny(missing_docs)]

pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod load;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod transform;
