use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod catalog;
mod cli;
mod config;
mod error;
mod markers;
mod navigation;
mod output;
mod search;
mod session;
mod state;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("campusnav=debug")
    } else {
        EnvFilter::new("campusnav=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Search(args) => cli::search::execute(args, config_path),
        Commands::Markers(args) => cli::markers::execute(args, config_path),
        Commands::Replay(args) => cli::replay::execute(args, config_path),
        Commands::Navigate(args) => cli::navigate::execute(args, config_path).await,
        Commands::Schema => cli::schema::execute(),
    }
}
