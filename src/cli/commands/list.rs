//! List command implementation.

use crate::core::tabulate;
use crate::db::Database;
use crate::models::series::Series;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// List tracked series as a table. Finished series are hidden unless
/// `all` is set.
pub fn list(db_path: &Path, all: bool) -> Result<()> {
    let db = Database::open(db_path)?;

    if db.is_empty() {
        println!("No series tracked yet.");
        println!(
            "Add one with: {}",
            "episode-tracker add <NAME> <DIRECTORY>".bold()
        );
        return Ok(());
    }

    let matching: Vec<&Series> = db
        .series
        .iter()
        .filter(|s| all || !s.finished())
        .collect();

    if matching.is_empty() {
        println!("{}", "All series are finished.".green());
        println!("Use {} to list them anyway.", "--all".bold());
        return Ok(());
    }

    println!("{}", tabulate::tabulate(&matching));

    Ok(())
}
