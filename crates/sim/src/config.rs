//! Simulation settings from the environment and command line.
//!
//! `GILDEDROSE_DAYS` and `GILDEDROSE_STOCK_FILE` set the defaults; positional
//! arguments `[days] [stock-file]` override them.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DAYS_ENV: &str = "GILDEDROSE_DAYS";
pub const STOCK_FILE_ENV: &str = "GILDEDROSE_STOCK_FILE";
pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of days to advance after the day-0 report.
    pub days: u32,
    /// JSON stock list; the built-in tavern stock when unset.
    pub stock_file: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            stock_file: None,
        }
    }
}

impl SimConfig {
    pub fn from_env_and_args() -> Result<Self> {
        let days_env = std::env::var(DAYS_ENV).ok();
        if days_env.is_none() {
            tracing::debug!("{DAYS_ENV} not set; defaulting to {DEFAULT_DAYS} days");
        }
        let stock_env = std::env::var(STOCK_FILE_ENV).ok();

        Self::resolve(days_env, stock_env, std::env::args().skip(1))
    }

    /// Merge environment values and CLI arguments (arguments win).
    pub fn resolve(
        days_env: Option<String>,
        stock_env: Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = days_env {
            config.days = parse_days(&raw).with_context(|| format!("invalid {DAYS_ENV}"))?;
        }
        if let Some(path) = stock_env.filter(|p| !p.trim().is_empty()) {
            config.stock_file = Some(PathBuf::from(path));
        }

        let mut args = args.into_iter();
        if let Some(raw) = args.next() {
            config.days = parse_days(&raw).context("invalid days argument")?;
        }
        if let Some(path) = args.next() {
            config.stock_file = Some(PathBuf::from(path));
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument {extra:?} (usage: gildedrose-sim [days] [stock-file])");
        }

        Ok(config)
    }
}

fn parse_days(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .with_context(|| format!("expected a non-negative day count, got {raw:?}"))
}
