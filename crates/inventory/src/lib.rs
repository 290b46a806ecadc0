//! Inventory aging domain module.
//!
//! Items age once per simulated day according to their category. Everything
//! here is deterministic domain logic (no IO, no storage); the driver that
//! advances days and prints the stock lives elsewhere.

pub mod aging;
pub mod category;
pub mod inventory;
pub mod item;
pub mod quality;

pub use aging::{tick, transition};
pub use category::{Category, EVENT_TICKET_NAME, LEGENDARY_NAME, RIPENING_NAME, classify};
pub use inventory::{Inventory, StartingQualityPolicy};
pub use item::{Item, ItemRecord};
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, clamped_decrease, clamped_increase};
