//! Item categories and name-based classification.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Name of the single legendary item.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
/// Name of the item that ripens (gains quality) with age.
pub const RIPENING_NAME: &str = "Aged Brie";
/// Name of the concert ticket item.
pub const EVENT_TICKET_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Aging category of an item.
///
/// Closed set: every name maps to exactly one of these, `Generic` being the
/// fallback. An item never changes category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Never ages, quality pinned at 80.
    Legendary,
    /// Gains quality every day, twice as fast once expired.
    Ripening,
    /// Gains quality as the event approaches, worthless after it.
    EventTicket,
    /// Loses quality every day, twice as fast once expired.
    Generic,
}

impl ValueObject for Category {}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::Ripening => "ripening",
            Category::EventTicket => "event_ticket",
            Category::Generic => "generic",
        }
    }

    pub fn is_legendary(&self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an item by its name.
///
/// Names are compared literally (no trimming, no case folding).
pub fn classify(name: &str) -> Category {
    match name {
        LEGENDARY_NAME => Category::Legendary,
        RIPENING_NAME => Category::Ripening,
        EVENT_TICKET_NAME => Category::EventTicket,
        _ => Category::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_category() {
        assert_eq!(classify("Sulfuras, Hand of Ragnaros"), Category::Legendary);
        assert_eq!(classify("Aged Brie"), Category::Ripening);
        assert_eq!(
            classify("Backstage passes to a TAFKAL80ETC concert"),
            Category::EventTicket
        );
    }

    #[test]
    fn unknown_names_fall_back_to_generic() {
        assert_eq!(classify("foo"), Category::Generic);
        assert_eq!(classify(""), Category::Generic);
        assert_eq!(classify("Conjured Mana Cake"), Category::Generic);
    }

    #[test]
    fn matching_is_literal() {
        assert_eq!(classify("aged brie"), Category::Generic);
        assert_eq!(classify("Aged Brie "), Category::Generic);
        assert_eq!(classify("Backstage passes"), Category::Generic);
        assert_eq!(classify("SULFURAS, HAND OF RAGNAROS"), Category::Generic);
    }

    #[test]
    fn category_serializes_as_snake_case() {
        let json = serde_json::to_string(&Category::EventTicket).unwrap();
        assert_eq!(json, "\"event_ticket\"");
        assert_eq!(Category::EventTicket.to_string(), "event_ticket");
    }
}
