//! Series database.
//!
//! All tracked series live in one flat file. The on-disk format is picked
//! from the file extension through a closed enum; only CSV exists today,
//! and anything else is rejected up front.

pub mod in_csv;

use crate::models::series::Series;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
}

impl Format {
    /// Pick the format for a database path from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Format::Csv),
            other => Err(Error::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// The series database.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    format: Format,
    /// Every tracked series, in file order.
    pub series: Vec<Series>,
}

impl Database {
    /// Open a database file. A missing file yields an empty database so
    /// the first run needs no setup step.
    pub fn open(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;

        let series = if path.exists() {
            match format {
                Format::Csv => in_csv::read(path)?,
            }
        } else {
            tracing::debug!("Database {} does not exist yet", path.display());
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            format,
            series,
        })
    }

    /// Write every series back to the database file.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        match self.format {
            Format::Csv => in_csv::write(&self.path, &self.series),
        }
    }

    /// The database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a series by name.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Look up a series by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| s.name == name)
    }

    /// Add a new series. Series names are unique within the database.
    pub fn add(&mut self, series: Series) -> Result<()> {
        if self.get(&series.name).is_some() {
            return Err(Error::SeriesAlreadyExists(series.name));
        }
        self.series.push(series);
        Ok(())
    }

    /// Number of tracked series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the database has no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("series.csv")).unwrap(),
            Format::Csv
        );
        assert!(matches!(
            Format::from_path(Path::new("series.json")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            Format::from_path(Path::new("series")),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
