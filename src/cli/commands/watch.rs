//! Watch command implementation.

use crate::db::Database;
use crate::{Error, Result};
use colored::Colorize;
use std::path::Path;

/// Mark the current episode watched and advance to the next one.
pub fn watch(db_path: &Path, name: &str) -> Result<()> {
    let mut db = Database::open(db_path)?;
    let series = db
        .get_mut(name)
        .ok_or_else(|| Error::SeriesNotFound(name.to_string()))?;

    let current = series.current_ep;
    let Some(watched) = series.watch_current() else {
        return Err(Error::other(format!(
            "Series {name} has no episode {current}"
        )));
    };

    let finished = series.finished();
    let next_ep = series.current_ep;
    let series_name = series.name.clone();

    db.save()?;

    println!(
        "{} episode {} of {}",
        "Watched".green().bold(),
        watched,
        series_name
    );

    if finished && next_ep == watched {
        println!("{}", "Series finished!".bold().cyan());
    } else {
        println!("Next up: episode {}", next_ep);
    }

    Ok(())
}
