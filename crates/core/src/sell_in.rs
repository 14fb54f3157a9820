//! Sell-by countdown primitive.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Days remaining before an item's sale window closes.
///
/// Unbounded in both directions; negative means expired.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Count one elapsed day. Unconditional; may go arbitrarily negative.
    pub fn advance(&mut self) {
        self.0 -= 1;
    }

    /// True once the sale window has closed.
    pub fn is_expired(self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for SellIn {}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for SellIn {
    fn from(days: i32) -> Self {
        Self(days)
    }
}

impl From<SellIn> for i32 {
    fn from(days: SellIn) -> Self {
        days.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_goes_arbitrarily_negative() {
        let mut sell_in = SellIn::new(0);
        assert!(!sell_in.is_expired());
        sell_in.advance();
        assert_eq!(sell_in.value(), -1);
        assert!(sell_in.is_expired());
        sell_in.advance();
        assert_eq!(sell_in.value(), -2);
    }
}
