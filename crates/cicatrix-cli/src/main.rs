//! Cicatrix CLI - generate and run the wound-healing scenario.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "cicatrix")]
#[command(author, version, about = "Cicatrix - wound-healing agent scenario", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default cicatrix.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate the initial population and print its census
    Census {
        /// Config file (default: cicatrix.toml in this or a parent directory)
        #[arg(short, long)]
        config: Option<String>,

        /// Override the scenario seed
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate the population and advance the tissue
    Run {
        /// Config file (default: cicatrix.toml in this or a parent directory)
        #[arg(short, long)]
        config: Option<String>,

        /// Number of timesteps (default: from config)
        #[arg(short = 'n', long)]
        steps: Option<u64>,

        /// Override the scenario seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print final statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Census { config, seed } => commands::census::run(config.as_deref(), seed),
        Commands::Run {
            config,
            steps,
            seed,
            json,
        } => commands::run::run(config.as_deref(), steps, seed, json, cli.verbose),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
