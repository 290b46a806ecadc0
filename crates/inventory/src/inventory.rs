//! The inventory collection and its day-by-day advance.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::aging::tick;
use crate::category::{Category, classify};
use crate::item::{Item, ItemRecord};
use crate::quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// How construction treats a starting quality outside the aging range.
///
/// Aging never corrects an out-of-range quality retroactively, it only clamps
/// on change. `PassThrough` keeps that behavior at construction as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartingQualityPolicy {
    /// Accept any starting quality unchanged.
    #[default]
    PassThrough,
    /// Clamp non-legendary quality into `[0, 50]`, pin legendary quality to 80.
    Clamp,
    /// Fail construction on any out-of-range starting quality.
    Reject,
}

impl StartingQualityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartingQualityPolicy::PassThrough => "pass-through",
            StartingQualityPolicy::Clamp => "clamp",
            StartingQualityPolicy::Reject => "reject",
        }
    }

    /// Turn a record into an item under this policy.
    pub fn admit(self, record: ItemRecord) -> DomainResult<Item> {
        let category = classify(&record.name);
        let quality = match (self, category) {
            (StartingQualityPolicy::PassThrough, _) => record.quality,
            (StartingQualityPolicy::Clamp, Category::Legendary) => LEGENDARY_QUALITY,
            (StartingQualityPolicy::Clamp, _) => record.quality.clamp(MIN_QUALITY, MAX_QUALITY),
            (StartingQualityPolicy::Reject, Category::Legendary) => {
                if record.quality != LEGENDARY_QUALITY {
                    return Err(DomainError::validation(format!(
                        "{}: legendary quality must be {LEGENDARY_QUALITY}, got {}",
                        record.name, record.quality
                    )));
                }
                record.quality
            }
            (StartingQualityPolicy::Reject, _) => {
                if !(MIN_QUALITY..=MAX_QUALITY).contains(&record.quality) {
                    return Err(DomainError::validation(format!(
                        "{}: quality must be within {MIN_QUALITY}..={MAX_QUALITY}, got {}",
                        record.name, record.quality
                    )));
                }
                record.quality
            }
        };
        Ok(Item::new(record.name, record.sell_in, quality))
    }
}

impl core::fmt::Display for StartingQualityPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartingQualityPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass-through" | "passthrough" => Ok(StartingQualityPolicy::PassThrough),
            "clamp" => Ok(StartingQualityPolicy::Clamp),
            "reject" => Ok(StartingQualityPolicy::Reject),
            other => Err(DomainError::validation(format!(
                "unknown starting quality policy: {other}"
            ))),
        }
    }
}

/// Ordered collection of items, aged together one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Wrap existing items without any validation.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build an inventory from records, admitting each under `policy`.
    ///
    /// Order is preserved. The first rejected record aborts construction.
    pub fn from_records<I>(records: I, policy: StartingQualityPolicy) -> DomainResult<Self>
    where
        I: IntoIterator<Item = ItemRecord>,
    {
        let items = records
            .into_iter()
            .map(|record| policy.admit(record))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> DomainResult<&Item> {
        self.items.get(index).ok_or_else(DomainError::not_found)
    }

    /// Current state of every item as plain records.
    pub fn records(&self) -> Vec<ItemRecord> {
        self.items.iter().map(ItemRecord::from).collect()
    }

    /// Age every item by one day.
    ///
    /// Items are independent of each other; only the per-item step order matters.
    pub fn advance_one_day(&mut self) {
        let _span = tracing::debug_span!("advance_one_day", items = self.items.len()).entered();

        for item in &mut self.items {
            tick(item);
            tracing::trace!(
                name = item.name(),
                category = %item.category(),
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item aged"
            );
            if item.is_outdated() && !item.category().is_legendary() {
                tracing::debug!(name = item.name(), sell_in = item.sell_in(), "item past sell-by date");
            }
        }
    }

    /// Age every item by `days` days.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
