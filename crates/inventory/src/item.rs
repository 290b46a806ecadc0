use serde::{Deserialize, Serialize};

use gildedrose_core::{Entity, ValueObject};

use crate::category::{Category, classify};

/// Entity: an inventory item.
///
/// The name is the item's identity and fixes its category for life; only
/// `sell_in` and `quality` change, and only through [`crate::tick`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    #[serde(skip)]
    category: Category,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    /// Build an item as-is (no range checks on `quality`).
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = classify(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Days left before the sell-by date (negative once expired).
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Past the sell-by date.
    pub fn is_outdated(&self) -> bool {
        self.sell_in < 0
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Value object: the `(name, sellIn, quality)` triple an inventory is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl ValueObject for ItemRecord {}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}
