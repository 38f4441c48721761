//! Day-by-day simulation driver around the inventory engine.
//!
//! Builds the starting stock, advances it one day at a time and writes the
//! daily report. All IO of the workspace lives here.

pub mod config;
pub mod simulation;
pub mod stock;

pub use config::SimConfig;
pub use simulation::{run, RunSummary};
