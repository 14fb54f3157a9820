//! Daily update driver.

use crate::item::Item;

/// Apply exactly one day's update to every item, in sequence order.
///
/// Each item is updated once per call through its resolved category;
/// items never interact. Calling this N times simulates N elapsed days.
/// Not safe to run concurrently over overlapping slices; disjoint
/// slices are independent.
pub fn advance_day(items: &mut [Item]) {
    for item in items {
        item.category().age(item);
    }
}

/// Simulate `days` elapsed days over the whole collection.
pub fn advance_days(items: &mut [Item], days: u32) {
    for _ in 0..days {
        advance_day(items);
    }
}
