//! Episode Tracker CLI
//!
//! A command-line tool for tracking watch progress through episodic media
//! collections stored as files on disk.

use clap::Parser;
use episode_tracker::cli::{
    args::{Cli, Commands},
    commands::{add, list, next, show, watch},
};
use episode_tracker::models::config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();
    let db_path = cli
        .database
        .clone()
        .unwrap_or_else(|| config.database.clone());

    // Run the appropriate command
    match cli.command {
        Commands::List { all } => {
            list::list(&db_path, all)?;
        }

        Commands::Add { name, directory } => {
            add::add(&config, &db_path, &name, &directory)?;
        }

        Commands::Show { name } => {
            show::show(&db_path, &name)?;
        }

        Commands::Next { name } => {
            next::next(&config, &db_path, &name)?;
        }

        Commands::Watch { name } => {
            watch::watch(&db_path, &name)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("episode_tracker=debug")
    } else {
        EnvFilter::new("episode_tracker=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
