//! Show command implementation.

use crate::db::Database;
use crate::{Error, Result};
use colored::Colorize;
use std::path::Path;

/// Show a series and its per-episode watch history.
pub fn show(db_path: &Path, name: &str) -> Result<()> {
    let db = Database::open(db_path)?;
    let series = db
        .get(name)
        .ok_or_else(|| Error::SeriesNotFound(name.to_string()))?;

    println!("{} {}", "Series:".bold().cyan(), series.name);
    println!("  {} {}", "Template:".bold(), series.template);
    println!("  {} {}", "Next:".bold(), series.current_ep);
    println!("  {} {}", "Episodes:".bold(), series.len());
    println!();

    for ep in &series.episodes {
        let mark = if ep.watched() {
            "x".green().to_string()
        } else {
            " ".to_string()
        };
        let last = ep
            .last_watched
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!("  [{}] {:>4}  {}", mark, ep.number, last);
    }

    Ok(())
}
