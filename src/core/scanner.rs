//! Directory scanner module.
//!
//! Gathers the filename sample for template inference: the video files of
//! one series directory. The parser itself never touches the filesystem,
//! so this is the only place the sample is collected.

use crate::utils::fs::ensure_directory;
use crate::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "mov", "wmv", "m4v", "ts", "m2ts", "flv", "webm", "mpg", "mpeg", "ogm",
    "rmvb",
];

/// Check if a file extension is a video format.
fn is_video_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    VIDEO_EXTENSIONS.contains(&ext_lower.as_str())
}

/// Check if a filename indicates a sample file.
fn is_sample_filename(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.contains("sample") && !lower.contains("sampler")
}

/// Collect the video filenames directly inside `path`, sorted.
///
/// Subdirectories are not descended into: one series is assumed to live in
/// one directory, and extras or sample folders below it would only pollute
/// the inference sample.
pub fn collect_sample(path: &Path) -> Result<Vec<String>> {
    ensure_directory(path)?;

    let mut filenames: Vec<String> = Vec::new();

    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(ext) = entry.path().extension() else {
            continue;
        };
        if !is_video_extension(&ext.to_string_lossy()) {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        if is_sample_filename(&filename) {
            tracing::debug!("Skipping sample file: {}", filename);
            continue;
        }

        filenames.push(filename);
    }

    filenames.sort();
    Ok(filenames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video_extension() {
        assert!(is_video_extension("mkv"));
        assert!(is_video_extension("MP4"));
        assert!(!is_video_extension("txt"));
        assert!(!is_video_extension("nfo"));
    }

    #[test]
    fn test_is_sample_filename() {
        assert!(is_sample_filename("foo.sample.mkv"));
        assert!(is_sample_filename("Sample-episode.mkv"));
        assert!(!is_sample_filename("episode01.mkv"));
        assert!(!is_sample_filename("sampler-pack.mkv"));
    }
}
