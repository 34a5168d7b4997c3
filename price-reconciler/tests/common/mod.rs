#![allow(dead_code)]
use price_core::models::{DateTime, Price};

// Builds a price from timestamps in the import feed's `dd.mm.yyyy hh:mm:ss` form
pub fn price(
    code: &str,
    slot: u32,
    department: u32,
    begin: &str,
    end: &str,
    amount: i64,
) -> Price {
    Price::new(code, slot, department, at(begin), at(end), amount)
}

// Most scenarios deal with a single group
pub fn p(begin: &str, end: &str, amount: i64) -> Price {
    price("price_1", 1, 1, begin, end, amount)
}

pub fn at(value: &str) -> DateTime {
    DateTime::parse_feed(value).unwrap()
}

/// Output order is only meaningful within a group, so most assertions compare
/// the merged prices as a multiset.
pub fn assert_same_prices(actual: &[Price], expected: &[Price]) {
    let mut remaining: Vec<&Price> = expected.iter().collect();
    for price in actual {
        match remaining.iter().position(|candidate| *candidate == price) {
            Some(index) => {
                remaining.swap_remove(index);
            }
            None => panic!("unexpected price {price:?}\nexpected: {expected:#?}"),
        }
    }
    assert!(remaining.is_empty(), "missing prices: {remaining:#?}");
}
