//! CLI command implementations.

pub mod census;
pub mod init;
pub mod run;

use anyhow::{Context, Result};
use cicatrix::prelude::{PopulationReport, Tissue};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

/// Load the config and build a populated tissue from it.
pub(crate) fn populated_tissue(
    config_path: Option<&str>,
    seed: Option<u64>,
) -> Result<(Config, Tissue, PopulationReport)> {
    let mut config = Config::load(config_path.map(Path::new))?;
    if let Some(seed) = seed {
        config.scenario.seed = seed;
    }

    let mut tissue = Tissue::new(config.scenario.clone()).context("Invalid scenario")?;
    let report = tissue.populate().context("Population failed")?;
    Ok((config, tissue, report))
}

/// Print one `label: value` line with the value highlighted.
pub(crate) fn print_row(label: &str, value: impl ToString) {
    println!("  {:<18} {}", format!("{label}:"), value.to_string().cyan());
}
