//! File system utilities.

use crate::core::parser::EpisodePattern;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Resolve an episode pattern to a concrete path.
///
/// Exact patterns pass through untouched. Glob patterns are expanded
/// against the directory they point into; anything but exactly one match
/// is an error, since the caller is about to hand the path to a player.
pub fn resolve_pattern(pattern: &EpisodePattern) -> Result<PathBuf> {
    match pattern {
        EpisodePattern::Exact(path) => Ok(PathBuf::from(path)),
        EpisodePattern::Glob(pattern) => expand_glob(pattern),
    }
}

/// Expand a single-`*` glob pattern against the filesystem.
///
/// The wildcard stands for a stripped region inside the file name, so the
/// pattern is split into its directory and a `prefix*suffix` name match.
fn expand_glob(pattern: &str) -> Result<PathBuf> {
    let pattern_path = Path::new(pattern);
    let file_pattern = pattern_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some((prefix, suffix)) = file_pattern.split_once('*') else {
        // Patterns come from template resolution and always carry the
        // wildcard; a bare string is a caller error.
        return Err(Error::other(format!("not a glob pattern: {pattern}")));
    };

    let dir = match pattern_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.len() >= prefix.len() + suffix.len()
            && name.starts_with(prefix)
            && name.ends_with(suffix)
        {
            matches.push(entry.path());
        }
    }

    match matches.len() {
        0 => Err(Error::EpisodeNotOnDisk(pattern.to_string())),
        1 => Ok(matches.remove(0)),
        _ => {
            matches.sort();
            let listing = matches
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Err(Error::AmbiguousEpisodePath(pattern.to_string(), listing))
        }
    }
}
