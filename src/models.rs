//! Diesel models mapping to [`crate::schema`].
//!
//! [`Book`] is the read side (Queryable/Selectable against `books`);
//! [`ProcessedBook`] is the write side (Insertable into `books_processed`).
//! The processed row deliberately has no `price`, `stock_quantity`, or
//! `last_updated` field — the destination schema does not carry them, and the
//! type makes writing them impossible.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::{books, books_processed};

/// A row of the source `books` table. Read-only from this pipeline's side.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books, check_for_backend(diesel::pg::Pg))]
pub struct Book {
    /// Primary key in the upstream system of record.
    pub id: i32,
    /// Book title.
    pub title: String,
    /// List price. NUMERIC in the schema; never passes through a float.
    pub price: BigDecimal,
    /// Genre label (e.g. "SciFi").
    pub genre: String,
    /// Units in stock. Extracted but dropped by the transform.
    pub stock_quantity: i32,
    /// Last modification timestamp; the cutoff filters on this column.
    pub last_updated: NaiveDateTime,
}

/// A derived row bound for `books_processed`.
///
/// One is produced per extracted [`Book`] on every run; the destination is an
/// append-only log, so re-runs over an overlapping date range add duplicates.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = books_processed)]
pub struct ProcessedBook {
    /// Source book id, copied through (not unique in the destination).
    pub id: i32,
    /// Source title, copied through.
    pub title: String,
    /// Source genre, copied through.
    pub genre: String,
    /// The source price at full precision.
    pub original_price: BigDecimal,
    /// The source price rounded to one decimal place, half-to-even.
    pub rounded_price: BigDecimal,
    /// "budget" below 500, "premium" at or above it (on the rounded price).
    pub price_category: String,
}
