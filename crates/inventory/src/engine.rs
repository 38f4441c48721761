use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::Item;

/// Upper bound on quality for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;
/// Lower bound on quality for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// Tickets gain an extra point per day once fewer than this many days remain.
const TICKET_NEAR_DAYS: i32 = 11;
/// Tickets gain a third point per day once fewer than this many days remain.
const TICKET_IMMINENT_DAYS: i32 = 6;

/// An item together with the category resolved when it was stocked.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stocked {
    category: Category,
    item: Item,
}

/// Ordered stock list that ages one day per call.
///
/// Categories are resolved once in [`Inventory::new`]. Items are never added,
/// removed or reordered, and only `sell_in` and `quality` ever change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    stock: Vec<Stocked>,
}

impl Inventory {
    /// Take ownership of `items`, rejecting empty names.
    pub fn new(items: Vec<Item>) -> DomainResult<Self> {
        let stock = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| {
                if item.name.is_empty() {
                    return Err(DomainError::validation(format!(
                        "item name cannot be empty (position {position})"
                    )));
                }
                Ok(Stocked {
                    category: Category::of(&item.name),
                    item,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self { stock })
    }

    /// Age every item by one day, in stock order.
    pub fn advance_one_day(&mut self) {
        for stocked in &mut self.stock {
            age(stocked.category, &mut stocked.item);
        }
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &Item> + '_ {
        self.stock.iter().map(|s| &s.item)
    }

    /// Items paired with their resolved category.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Category, &Item)> + '_ {
        self.stock.iter().map(|s| (s.category, &s.item))
    }

    pub fn into_items(self) -> Vec<Item> {
        self.stock.into_iter().map(|s| s.item).collect()
    }
}

/// Age a caller-owned slice by one day.
///
/// Categories are resolved once per call; long simulations should prefer
/// [`Inventory`], which resolves them once up front.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        let category = Category::of(&item.name);
        age(category, item);
    }
}

/// Apply one day of the category's rule to a single item.
fn age(category: Category, item: &mut Item) {
    let quality = &mut item.quality;

    match category {
        Category::Legendary => return,
        Category::Appreciating => raise(quality),
        Category::EventTicket => {
            raise(quality);
            if item.sell_in < TICKET_NEAR_DAYS {
                raise(quality);
            }
            if item.sell_in < TICKET_IMMINENT_DAYS {
                raise(quality);
            }
        }
        Category::Generic => lower(quality),
    }

    item.sell_in = item.sell_in.saturating_sub(1);

    if item.sell_in < 0 {
        match category {
            Category::Legendary => {}
            Category::Appreciating => raise(&mut item.quality),
            Category::EventTicket => item.quality = MIN_QUALITY,
            Category::Generic => lower(&mut item.quality),
        }
    }
}

// Out-of-band values are left alone: only in-band quality moves.
fn raise(quality: &mut i32) {
    if *quality < MAX_QUALITY {
        *quality += 1;
    }
}

fn lower(quality: &mut i32) {
    if *quality > MIN_QUALITY {
        *quality -= 1;
    }
}
