use std::io::Write;

use anyhow::{Context, Result};
use gildedrose_inventory::Inventory;

use crate::config::SimConfig;
use crate::stock::{default_stock, load_stock};

/// End-of-run figures, logged once the last day is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub days: u32,
    pub items: usize,
    /// Non-legendary items past their sell-by date.
    pub expired: usize,
    /// Non-legendary items whose quality reached zero.
    pub worthless: usize,
}

impl RunSummary {
    fn of(days: u32, inventory: &Inventory) -> Self {
        let perishable = || inventory.iter().filter(|(c, _)| !c.is_legendary());
        Self {
            days,
            items: inventory.len(),
            expired: perishable().filter(|(_, i)| i.sell_in < 0).count(),
            worthless: perishable().filter(|(_, i)| i.quality <= 0).count(),
        }
    }
}

/// Report day 0, then advance and report once per configured day.
pub fn run(config: &SimConfig, out: &mut impl Write) -> Result<RunSummary> {
    let items = match &config.stock_file {
        Some(path) => load_stock(path)?,
        None => default_stock(),
    };
    let mut inventory = Inventory::new(items).context("invalid starting stock")?;

    tracing::info!(
        days = config.days,
        items = inventory.len(),
        stock_file = ?config.stock_file,
        "starting simulation"
    );

    for day in 0..=config.days {
        if day > 0 {
            inventory.advance_one_day();
        }
        write_day(out, day, &inventory).context("failed to write report")?;
        tracing::debug!(day, "day reported");
    }

    let summary = RunSummary::of(config.days, &inventory);
    tracing::info!(
        days = summary.days,
        items = summary.items,
        expired = summary.expired,
        worthless = summary.worthless,
        "simulation finished"
    );

    Ok(summary)
}

fn write_day(out: &mut impl Write, day: u32, inventory: &Inventory) -> std::io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    for item in inventory.items() {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}
