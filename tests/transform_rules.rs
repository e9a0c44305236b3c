use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use proptest::prelude::*;

use books_etl::extract::cutoff_start;
use books_etl::models::Book;
use books_etl::transform::{PriceCategory, categorize, round_price, transform_books};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn book_updated(id: i32, price: &str, ymd: (i32, u32, u32)) -> Book {
    Book {
        id,
        title: "X".into(),
        price: dec(price),
        genre: "SciFi".into(),
        stock_quantity: 3,
        last_updated: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    }
}

/// Price in whole cents, as an exact decimal string.
fn cents_to_price(cents: i64) -> BigDecimal {
    dec(&format!("{}.{:02}", cents / 100, cents % 100))
}

/// Half-to-even rounding of a cent amount to tenths, done in integer math.
fn cents_rounded_to_tenths(cents: i64) -> BigDecimal {
    let tenths = cents / 10;
    let rem = cents % 10;
    let rounded = match rem {
        r if r > 5 => tenths + 1,
        5 if tenths % 2 != 0 => tenths + 1,
        _ => tenths,
    };
    dec(&format!("{}.{}", rounded / 10, rounded % 10))
}

#[test]
fn price_499_95_rounds_up_to_500_and_is_premium() {
    let input = book_updated(1, "499.95", (2025, 1, 5));
    let out = transform_books(vec![input]);

    assert_eq!(out.len(), 1);
    let row = &out[0];
    assert_eq!(row.id, 1);
    assert_eq!(row.title, "X");
    assert_eq!(row.genre, "SciFi");
    assert_eq!(row.original_price, dec("499.95"));
    assert_eq!(row.rounded_price, dec("500.0"));
    assert_eq!(row.price_category, "premium");
}

#[test]
fn cutoff_is_inclusive_on_the_bound_and_excludes_earlier_days() {
    let cutoff = cutoff_start(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

    let included = book_updated(1, "10.00", (2025, 1, 5));
    let on_bound = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let excluded = book_updated(2, "10.00", (2024, 12, 31));

    // Mirrors the `last_updated >= cutoff` predicate the extractor binds.
    assert!(included.last_updated >= cutoff);
    assert!(on_bound >= cutoff);
    assert!(excluded.last_updated < cutoff);
}

#[test]
fn empty_batch_transforms_to_empty_batch() {
    assert!(transform_books(Vec::new()).is_empty());
}

proptest! {
    #[test]
    fn rounding_matches_integer_half_even(cents in 0i64..1_000_000) {
        let price = cents_to_price(cents);
        prop_assert_eq!(round_price(&price), cents_rounded_to_tenths(cents));
    }

    #[test]
    fn category_agrees_with_the_500_predicate(cents in 0i64..1_000_000) {
        let rounded = round_price(&cents_to_price(cents));
        let expected = if rounded < BigDecimal::from(500) {
            PriceCategory::Budget
        } else {
            PriceCategory::Premium
        };
        prop_assert_eq!(categorize(&rounded), expected);
    }

    #[test]
    fn transform_never_changes_row_count(prices in proptest::collection::vec(0i64..1_000_000, 0..100)) {
        let batch: Vec<Book> = prices
            .iter()
            .enumerate()
            .map(|(i, &cents)| {
                let mut b = book_updated(i as i32, "0.00", (2025, 1, 2));
                b.price = cents_to_price(cents);
                b
            })
            .collect();
        let expected_ids: Vec<i32> = batch.iter().map(|b| b.id).collect();

        let out = transform_books(batch);

        prop_assert_eq!(out.len(), prices.len());
        let got_ids: Vec<i32> = out.iter().map(|r| r.id).collect();
        prop_assert_eq!(got_ids, expected_ids);
    }
}
