//! Inventory domain module.
//!
//! Business rules for ageing stock by one day at a time, implemented purely as
//! deterministic domain logic (no IO, no logging, no storage).

pub mod category;
pub mod engine;
pub mod item;

pub use category::Category;
pub use engine::{advance_one_day, Inventory, MAX_QUALITY, MIN_QUALITY};
pub use item::Item;
