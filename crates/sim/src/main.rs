use anyhow::Context;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = gildedrose_sim::SimConfig::from_env_and_args()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_sim::run(&config, &mut out).context("simulation failed")?;

    Ok(())
}
