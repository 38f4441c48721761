//! Starting stock: the built-in tavern list or a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use gildedrose_inventory::Item;

/// The tavern's usual shelf.
pub fn default_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mama Cakes", 3, 6),
    ]
}

/// Read a JSON array of `{ "name", "sell_in", "quality" }` records.
pub fn load_stock(path: &Path) -> Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stock file {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse stock file {}", path.display()))?;
    Ok(items)
}
