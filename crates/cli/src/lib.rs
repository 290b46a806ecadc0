//! `gilded-rose` simulator: loads an inventory, advances it day by day and
//! prints its state after every day.

pub mod config;
pub mod fixture;
pub mod report;

use std::fs;
use std::io::Write;

use anyhow::Context;

use gildedrose_inventory::{Inventory, ItemRecord};

use crate::config::SimulationConfig;

/// Build the starting inventory described by `config`.
pub fn load_inventory(config: &SimulationConfig) -> anyhow::Result<Inventory> {
    let records: Vec<ItemRecord> = match &config.inventory_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read inventory file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse inventory file {}", path.display()))?
        }
        None => fixture::default_records(),
    };

    let inventory = Inventory::from_records(records, config.quality_policy)
        .context("inventory rejected by starting quality policy")?;
    Ok(inventory)
}

/// Run the simulation, writing one report block per day to `out`.
pub fn run<W: Write>(config: &SimulationConfig, out: &mut W) -> anyhow::Result<Inventory> {
    let mut inventory = load_inventory(config)?;

    tracing::info!(
        items = inventory.len(),
        days = config.days,
        policy = %config.quality_policy,
        "starting simulation"
    );

    for day in 0..config.days {
        report::write_day(out, day, &inventory).context("failed to write report")?;
        inventory.advance_one_day();
    }

    tracing::info!(days = config.days, "simulation finished");
    Ok(inventory)
}
