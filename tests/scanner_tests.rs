//! Integration tests for the scanner module.
//!
//! Tests cover:
//! - Sample collection from a series directory
//! - Non-video and sample file filtering
//! - Error handling for non-existent paths

use episode_tracker::core::scanner::collect_sample;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_collect_from_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let filenames = collect_sample(temp_dir.path()).unwrap();
    assert!(filenames.is_empty());
}

#[test]
fn test_collect_returns_sorted_video_filenames() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("foo02.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("foo01.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("foo03.mkv"), "fake").unwrap();

    let filenames = collect_sample(temp_dir.path()).unwrap();
    assert_eq!(filenames, vec!["foo01.mkv", "foo02.mkv", "foo03.mkv"]);
}

#[test]
fn test_collect_skips_non_video_files() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("foo01.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("foo01.srt"), "subs").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "text").unwrap();

    let filenames = collect_sample(temp_dir.path()).unwrap();
    assert_eq!(filenames, vec!["foo01.mkv"]);
}

#[test]
fn test_collect_skips_sample_files() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("foo01.mkv"), "fake").unwrap();
    fs::write(temp_dir.path().join("foo.sample.mkv"), "fake").unwrap();

    let filenames = collect_sample(temp_dir.path()).unwrap();
    assert_eq!(filenames, vec!["foo01.mkv"]);
}

#[test]
fn test_collect_does_not_descend_into_subdirectories() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("foo01.mkv"), "fake").unwrap();
    let extras = temp_dir.path().join("Extras");
    fs::create_dir(&extras).unwrap();
    fs::write(extras.join("bonus.mkv"), "fake").unwrap();

    let filenames = collect_sample(temp_dir.path()).unwrap();
    assert_eq!(filenames, vec!["foo01.mkv"]);
}

#[test]
fn test_collect_nonexistent_path() {
    let result = collect_sample(Path::new("/nonexistent/path"));
    assert!(result.is_err());
}
