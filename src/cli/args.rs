//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Episode Tracker - Keep track of where you are in your series
#[derive(Parser, Debug)]
#[command(name = "episode-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the series database file
    #[arg(short, long, global = true, value_name = "DATABASE")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tracked series
    List {
        /// Include finished series
        #[arg(long)]
        all: bool,
    },

    /// Add a new series from a directory of episode files
    Add {
        /// Name for the new series
        #[arg(value_name = "NAME")]
        name: String,

        /// Directory containing the episode files
        #[arg(value_name = "DIRECTORY")]
        directory: PathBuf,
    },

    /// Show a series and its episode history
    Show {
        /// Series name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print the path of the episode to watch next
    Next {
        /// Series name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Mark the current episode watched and advance
    Watch {
        /// Series name
        #[arg(value_name = "NAME")]
        name: String,
    },
}
