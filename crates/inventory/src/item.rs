use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shelflife_core::{ParseItemError, Quality, SellIn};

use crate::category::Category;

/// One inventory line: plain data, owned by the caller for its full
/// lifetime.
///
/// The name identifies the item's aging category, not a unique id; two
/// lines may share a name and remain distinct stock. Initial values are
/// taken as-is - an out-of-range quality is preserved, never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: SellIn,
    pub quality: Quality,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in: SellIn::new(sell_in),
            quality: Quality::new(quality),
        }
    }

    /// The aging category this line resolves to.
    pub fn category(&self) -> Category {
        Category::for_name(&self.name)
    }
}

impl core::fmt::Display for Item {
    /// `name, sell-in, quality` - the display/debugging form.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl FromStr for Item {
    type Err = ParseItemError;

    /// Inverse of `Display`.
    ///
    /// The two trailing comma-separated fields are the numbers; the rest
    /// is the name, so names containing commas survive a round trip.
    /// Syntax only: any name is accepted and values are not range-checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ',');
        let quality = fields.next().ok_or(ParseItemError::missing("quality"))?;
        let sell_in = fields.next().ok_or(ParseItemError::missing("sell-in"))?;
        let name = fields
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ParseItemError::missing("name"))?;

        let sell_in: i32 = sell_in
            .trim()
            .parse()
            .map_err(|_| ParseItemError::invalid("sell-in", sell_in.trim()))?;
        let quality: i32 = quality
            .trim()
            .parse()
            .map_err(|_| ParseItemError::invalid("quality", quality.trim()))?;

        Ok(Item::new(name, sell_in, quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_name_sell_in_quality() {
        let item = Item::new("aged-brie", 3, 10);
        assert_eq!(item.to_string(), "aged-brie, 3, 10");
    }

    #[test]
    fn parse_is_the_inverse_of_display() {
        let item = Item::new("conjured", -1, 4);
        let parsed: Item = item.to_string().parse().unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn parse_keeps_commas_in_the_name() {
        let item: Item = "sulfuras, hand of ragnaros, 10, 80".parse().unwrap();
        assert_eq!(item.name, "sulfuras, hand of ragnaros");
        assert_eq!(item.sell_in.value(), 10);
        assert_eq!(item.quality.value(), 80);
    }

    #[test]
    fn parse_rejects_missing_and_malformed_fields() {
        assert_eq!(
            "lone-name".parse::<Item>().unwrap_err(),
            ParseItemError::missing("sell-in")
        );
        assert_eq!(
            "brie, soon, 4".parse::<Item>().unwrap_err(),
            ParseItemError::invalid("sell-in", "soon")
        );
        assert_eq!(
            "brie, 4, shiny".parse::<Item>().unwrap_err(),
            ParseItemError::invalid("quality", "shiny")
        );
        assert_eq!(
            " , 4, 4".parse::<Item>().unwrap_err(),
            ParseItemError::missing("name")
        );
    }

    #[test]
    fn serializes_with_transparent_numeric_fields() {
        let item = Item::new("backstage-pass", 4, 7);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "backstage-pass", "sell_in": 4, "quality": 7 })
        );
    }
}
