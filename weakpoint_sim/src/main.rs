//! weakpoint_sim - Run a weak point scenario many times and report the spread
//!
//! Usage: `weakpoint_sim <scenario.toml>`
//!
//! Set `RUST_LOG=weakpoint_core=debug` to trace every selection.

mod scenario;
mod simulation;

use anyhow::{Context, Result};
use scenario::Scenario;
use simulation::Simulation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: weakpoint_sim <scenario.toml>")?;

    let scenario = Scenario::load(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let simulation = Simulation::new(&scenario)
        .with_context(|| format!("invalid definitions in {}", path.display()))?;

    let report = simulation.run();
    println!("{}", report.render());
    Ok(())
}
