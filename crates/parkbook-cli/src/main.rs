//! Parkbook CLI - Query visitors, parks and trips from a scenario file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;
mod scenario;

use commands::{completions, park, report, trips, visitor};
use output::OutputFormat;
use parkbook_core::World;
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "parkbook")]
#[command(author, version, about = "Explore visitors, national parks and the trips between them")]
pub struct Cli {
    /// Scenario file (TOML) describing visitors, parks and trips
    #[arg(short, long, env = "PARKBOOK_SCENARIO", global = true)]
    pub scenario: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, env = "PARKBOOK_FORMAT", default_value = "table", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a visitor's trips and the parks they visited
    Visitor(visitor::VisitorArgs),
    /// Show a park's trips, visitors and best visitor
    Park(park::ParkArgs),
    /// List every trip in the scenario
    Trips,
    /// Summarize all parks and the most visited one
    Report,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the world built from the scenario
pub struct AppContext {
    pub world: World,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let path = cli.scenario.as_ref().ok_or_else(|| {
            anyhow::anyhow!("No scenario file given; pass --scenario or set PARKBOOK_SCENARIO")
        })?;
        tracing::debug!("Loading scenario from: {:?}", path);

        let world = Scenario::load(path)?.build()?;
        tracing::info!(
            "Built world: {} visitors, {} parks, {} trips",
            world.visitors().len(),
            world.parks().len(),
            world.trips().len()
        );

        Ok(Self { world })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting parkbook CLI");

    // Completions need no scenario, so the world is only built per command
    let ctx = || AppContext::new(&cli);

    let rendered = match &cli.command {
        Commands::Visitor(args) => visitor::run(args, &cli, &ctx()?)?,
        Commands::Park(args) => park::run(args, &cli, &ctx()?)?,
        Commands::Trips => trips::run(&cli, &ctx()?)?,
        Commands::Report => report::run(&cli, &ctx()?)?,
        Commands::Completions(args) => return completions::run(args),
    };

    if !cli.quiet {
        println!("{}", rendered);
    }

    Ok(())
}
