use clap::Parser;

use gildedrose_cli::config::SimulationConfig;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = SimulationConfig::parse();
    tracing::debug!(?config, "configuration resolved");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_cli::run(&config, &mut out)?;
    Ok(())
}
