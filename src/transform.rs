//! Per-row derivations between extract and load.
//!
//! Pure and infallible: no I/O, no partial success, output length always
//! equals input length. The rounding rule is pinned to half-to-even at one
//! decimal place, matching the behavior of the system this pipeline replaced.

use bigdecimal::{BigDecimal, RoundingMode};

use crate::models::{Book, ProcessedBook};

/// Rounded prices strictly below this value are "budget"; everything at or
/// above it is "premium".
pub const PREMIUM_THRESHOLD: i32 = 500;

/// Price bucket derived from the rounded price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCategory {
    /// Rounded price below [`PREMIUM_THRESHOLD`].
    Budget,
    /// Rounded price at or above [`PREMIUM_THRESHOLD`].
    Premium,
}

impl PriceCategory {
    /// The destination-table representation of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceCategory::Budget => "budget",
            PriceCategory::Premium => "premium",
        }
    }
}

/// Round a price to one decimal place, half-to-even.
pub fn round_price(price: &BigDecimal) -> BigDecimal {
    price.with_scale_round(1, RoundingMode::HalfEven)
}

/// Bucket a rounded price: strictly below 500 is budget, 500 and up premium.
pub fn categorize(rounded: &BigDecimal) -> PriceCategory {
    if *rounded < BigDecimal::from(PREMIUM_THRESHOLD) {
        PriceCategory::Budget
    } else {
        PriceCategory::Premium
    }
}

/// Derive a processed row from one source row.
pub fn transform_book(book: Book) -> ProcessedBook {
    let rounded_price = round_price(&book.price);
    let price_category = categorize(&rounded_price).as_str().to_owned();
    ProcessedBook {
        id: book.id,
        title: book.title,
        genre: book.genre,
        original_price: book.price,
        rounded_price,
        price_category,
    }
}

/// Derive processed rows for a whole batch, preserving order and count.
pub fn transform_books(books: Vec<Book>) -> Vec<ProcessedBook> {
    books.into_iter().map(transform_book).collect()
}
