//! Add command implementation.
//!
//! Scans a directory for episode files, infers the filename template from
//! them and creates the series.

use crate::core::parser::TemplateParser;
use crate::core::scanner;
use crate::db::Database;
use crate::models::config::Config;
use crate::models::series::Series;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Add a new series from a directory of episode files.
pub fn add(config: &Config, db_path: &Path, name: &str, directory: &Path) -> Result<()> {
    let filenames = scanner::collect_sample(directory)?;

    if filenames.is_empty() {
        return Err(crate::Error::other(format!(
            "No video files found in {}",
            directory.display()
        )));
    }

    tracing::debug!(
        "Collected {} filenames from {}",
        filenames.len(),
        directory.display()
    );

    let parser = TemplateParser::with_config(config.parser_config());
    let Some(inferred) = parser.parse(&filenames)? else {
        println!(
            "{}",
            "Could not guess a template from a single file.".yellow()
        );
        println!(
            "Add more episode files to {} and try again.",
            directory.display()
        );
        return Ok(());
    };

    // Store the template as a full path so resolution works from anywhere.
    let template = directory
        .join(&inferred.template)
        .to_string_lossy()
        .into_owned();

    let mut db = Database::open(db_path)?;
    db.add(Series::new(
        name.to_string(),
        template.clone(),
        inferred.first_ep,
        inferred.last_ep,
    ))?;
    db.save()?;

    println!(
        "{} {} (episodes {}-{})",
        "Added".green().bold(),
        name,
        inferred.first_ep,
        inferred.last_ep
    );
    println!("  {} {}", "Template:".bold(), template);

    Ok(())
}
