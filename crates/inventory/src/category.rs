//! Closed set of update-rule categories.

use gildedrose_core::ValueObject;

/// Name of the legendary item.
pub const LEGENDARY: &str = "Sulfuras, Hand of Ragnaros";
/// Name of the item that gets better with age.
pub const APPRECIATING: &str = "Aged Brie";
/// Name of the concert ticket.
pub const EVENT_TICKET: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Rule-selection class of an item.
///
/// Resolved from the item name once, when the item enters an [`Inventory`].
/// Conjured goods have no rule of their own and fall into `Generic`.
///
/// [`Inventory`]: crate::Inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Legendary,
    Appreciating,
    EventTicket,
    Generic,
}

impl ValueObject for Category {}

impl Category {
    /// Map an item name to its category by exact match.
    pub fn of(name: &str) -> Self {
        match name {
            LEGENDARY => Category::Legendary,
            APPRECIATING => Category::Appreciating,
            EVENT_TICKET => Category::EventTicket,
            _ => Category::Generic,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}
