//! DVNC CLI - Command-line interface for DVNC
//!
//! Usage:
//!   dvnc                          - Start interactive mode
//!   dvnc analyze <prompt...>      - Analyze a single prompt
//!   dvnc domains                  - List domains and their concepts
//!   dvnc init [dir]               - Write a default dvnc.json

use clap::{Parser, Subcommand};
use cli::commands::{AnalyzeCommand, DomainsCommand, InitCommand};
use cli::interactive::InteractiveCli;
use cli::settings::{self, Overrides};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dvnc")]
#[command(about = "DVNC.ai - Multi-domain design synthesis inspired by da Vinci's notebooks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a dvnc.json configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for concept selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Name of the configurable third domain
    #[arg(short, long, global = true)]
    domain: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single engineering challenge
    Analyze(AnalyzeCommand),
    /// List registered domains and their knowledge
    Domains(DomainsCommand),
    /// Initialize a new DVNC project
    Init(InitCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Init(cmd)) = &cli.command {
        return cmd.run(cli.domain.as_deref());
    }

    let overrides = Overrides {
        config: cli.config,
        seed: cli.seed,
        domain: cli.domain,
    };
    let config = settings::resolve(&overrides, &std::env::current_dir()?)?;

    match cli.command {
        Some(Commands::Analyze(cmd)) => cmd.run(config, cli.json),
        Some(Commands::Domains(cmd)) => cmd.run(config, cli.json),
        Some(Commands::Init(_)) => Ok(()),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(config)?;
            interactive.run()
        }
    }
}
