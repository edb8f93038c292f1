pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prensa")]
#[command(about = "Prensa CLI - maintenance commands for the news API database")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Insert the base sections, skipping slugs that already exist")]
    Seed,

    #[command(about = "Probe database connectivity and print the store's current time")]
    Check,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Seed => commands::seed::handle().await,
        Commands::Check => commands::check::handle().await,
    }
}
