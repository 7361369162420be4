//! Generate the initial population and print its census.

use anyhow::Result;
use cicatrix::prelude::*;
use colored::Colorize;

use super::{populated_tissue, print_row};

pub fn run(config_path: Option<&str>, seed: Option<u64>) -> Result<()> {
    let (config, _tissue, report) = populated_tissue(config_path, seed)?;
    let scenario = &config.scenario;

    println!("{}", "Cicatrix Population Census".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Sampling".blue().bold());
    print_row("Seed", scenario.seed);
    print_row(
        "Bounds",
        format!("[{}, {})", scenario.bound_min, scenario.bound_max),
    );
    print_row("Samples", report.samples);
    print_row("Agents", report.inserted);
    println!();

    println!("{}", "Regions".blue().bold());
    for region in Region::ALL {
        let samples = report.samples_in(region);
        let share = if report.samples > 0 {
            samples as f64 / report.samples as f64 * 100.0
        } else {
            0.0
        };
        print_row(region.name(), format!("{samples} ({share:.1}%)"));
    }
    println!();

    println!("{}", "Cells".blue().bold());
    for kind in CellKind::ALL {
        print_row(kind.name(), report.count(kind));
    }
    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
