//! Generate the population and advance the tissue.

use anyhow::{Context, Result};
use cicatrix::prelude::*;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use super::{populated_tissue, print_row};

#[derive(Serialize)]
struct RunSummary<'a> {
    seed: u64,
    steps: u64,
    population: &'a PopulationReport,
    stats: TissueStats,
}

pub fn run(
    config_path: Option<&str>,
    steps: Option<u64>,
    seed: Option<u64>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let (config, mut tissue, report) = populated_tissue(config_path, seed)?;
    let steps = steps.unwrap_or(config.scenario.steps);

    if !json {
        println!(
            "{} Generated {} agents from {} samples",
            "→".blue(),
            report.inserted.to_string().cyan(),
            report.samples.to_string().cyan()
        );
        if !config.scenario.fibroblast_growth {
            println!(
                "  {} fibroblast_growth is off; the tissue will not change",
                "•".yellow()
            );
        } else if config.scenario.lifecycle.is_supercritical() {
            println!(
                "  {} division_probability {} makes the fibroblast count grow exponentially; \
                 {} steps may exhaust memory",
                "!".red().bold(),
                config.scenario.lifecycle.division_probability,
                steps
            );
        }
        println!("{} Running {} steps...", "→".blue(), steps.to_string().cyan());
    }

    let pb = if json || !config.output.progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(steps)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} steps")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    let report_every = config.output.report_every;
    for _ in 0..steps {
        let events = tissue.step();
        if verbose && report_every > 0 {
            if let Some(TissueEvent::StepComplete {
                tick,
                population,
                divisions,
            }) = events.last()
            {
                if tick % report_every == 0 {
                    pb.println(format!(
                        "  tick {tick}: {population} agents, {divisions} divisions"
                    ));
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stats = tissue.stats();
    if json {
        let summary = RunSummary {
            seed: tissue.config().seed,
            steps,
            population: &report,
            stats,
        };
        let out = serde_json::to_string_pretty(&summary).context("Failed to serialize stats")?;
        println!("{out}");
        return Ok(());
    }

    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    println!(
        "  Agents: {} → {}",
        report.inserted.to_string().yellow(),
        stats.population.to_string().green()
    );
    print_row("Ticks", stats.tick);
    print_row("Divisions", stats.total_divisions);
    print_row("Quiesced", stats.total_quiesced);
    print_row("Growing", stats.growing);
    print_row("Mature", stats.mature);
    print_row("Division-capable", stats.division_capable);
    println!();
    println!("{}", "Cells".blue().bold());
    for kind in CellKind::ALL {
        print_row(kind.name(), stats.census.get(&kind).copied().unwrap_or(0));
    }

    Ok(())
}
