use serde::{Deserialize, Serialize};

use shelflife_core::Quality;

use crate::item::Item;

/// Aging-rule category. The set is fixed and small, so dispatch is a
/// closed enum matched exhaustively - not a lookup at every call site.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Plain stock: loses quality daily, twice as fast once expired.
    Standard,
    /// Appreciates as it ages, twice as fast once expired.
    AgedBrie,
    /// Never has to be sold; never changes.
    Legendary,
    /// Appreciates faster as the event nears, worthless after it.
    BackstagePass,
    /// Degrades twice as fast as standard stock.
    Conjured,
}

impl Category {
    /// Resolve an item name to its category.
    ///
    /// Exact-string lookup of the four special names; every other name
    /// (typos included) is standard stock. Total function - an unmatched
    /// name is the common path, not a failure.
    pub fn for_name(name: &str) -> Self {
        match name {
            "aged-brie" => Self::AgedBrie,
            "legendary" => Self::Legendary,
            "backstage-pass" => Self::BackstagePass,
            "conjured" => Self::Conjured,
            _ => Self::Standard,
        }
    }

    /// Stable kebab-case tag, for display and logging.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::AgedBrie => "aged-brie",
            Self::Legendary => "legendary",
            Self::BackstagePass => "backstage-pass",
            Self::Conjured => "conjured",
        }
    }

    /// Apply one day's aging to `item`.
    ///
    /// Exactly one rule body runs per call; all quality movement goes
    /// through the capped/floored primitives except the backstage-pass
    /// post-expiry reset, which voids the item outright.
    pub fn age(self, item: &mut Item) {
        match self {
            Self::Standard => age_standard(item),
            Self::AgedBrie => age_brie(item),
            Self::Legendary => {}
            Self::BackstagePass => age_backstage_pass(item),
            Self::Conjured => age_conjured(item),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

fn age_standard(item: &mut Item) {
    item.sell_in.advance();
    item.quality.degrade();
    if item.sell_in.is_expired() {
        item.quality.degrade();
    }
}

fn age_brie(item: &mut Item) {
    item.sell_in.advance();
    item.quality.appreciate();
    if item.sell_in.is_expired() {
        item.quality.appreciate();
    }
}

fn age_backstage_pass(item: &mut Item) {
    // Appreciation tiers compare the pre-advance sell-in.
    item.quality.appreciate();
    if item.sell_in.value() <= 10 {
        item.quality.appreciate();
    }
    if item.sell_in.value() <= 5 {
        item.quality.appreciate();
    }
    item.sell_in.advance();
    if item.sell_in.is_expired() {
        // Not a degrade: an expired pass is worthless regardless of cap math.
        item.quality = Quality::worthless();
    }
}

fn age_conjured(item: &mut Item) {
    item.sell_in.advance();
    item.quality.degrade();
    item.quality.degrade();
    if item.sell_in.is_expired() {
        item.quality.degrade();
        item.quality.degrade();
    }
}
