//! Diesel table definitions for the external source and destination tables.
//!
//! Neither table is created or migrated by this crate: `books` is owned by
//! the upstream system of record and is read-only here; `books_processed` is
//! an append-only target this pipeline only inserts into.

#![allow(missing_docs)]

diesel::table! {
    books (id) {
        id -> Int4,
        title -> Text,
        price -> Numeric,
        genre -> Text,
        stock_quantity -> Int4,
        last_updated -> Timestamp,
    }
}

diesel::table! {
    books_processed (id) {
        id -> Int4,
        title -> Text,
        genre -> Text,
        original_price -> Numeric,
        rounded_price -> Numeric,
        price_category -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(books, books_processed);
