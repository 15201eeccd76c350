//! Next command implementation.
//!
//! Prints only the resolved path so the output can feed a player:
//! `mpv "$(episode-tracker next Foobar)"`.

use crate::core::parser::TemplateParser;
use crate::db::Database;
use crate::models::config::Config;
use crate::utils::fs;
use crate::{Error, Result};
use std::path::Path;

/// Print the path of the episode to watch next.
pub fn next(config: &Config, db_path: &Path, name: &str) -> Result<()> {
    let db = Database::open(db_path)?;
    let series = db
        .get(name)
        .ok_or_else(|| Error::SeriesNotFound(name.to_string()))?;

    let parser = TemplateParser::with_config(config.parser_config());
    let pattern = parser.episode_pattern(&series.template, series.current_ep)?;
    let path = fs::resolve_pattern(&pattern)?;

    println!("{}", path.display());

    Ok(())
}
