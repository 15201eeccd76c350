//! Integration tests for the series database.
//!
//! Tests cover:
//! - First-run behavior with a missing database file
//! - Save/reopen persistence of series and watch history
//! - Format selection by file extension

use episode_tracker::db::Database;
use episode_tracker::models::series::Series;
use episode_tracker::Error;
use tempfile::TempDir;

#[test]
fn test_open_missing_file_yields_empty_database() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(&temp_dir.path().join("series.csv")).unwrap();
    assert!(db.is_empty());
}

#[test]
fn test_save_and_reopen_preserves_series() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("series.csv");

    let mut db = Database::open(&path).unwrap();
    db.add(Series::new(
        "Foobar".to_string(),
        "/media/foo{}bar.mkv".to_string(),
        1,
        12,
    ))
    .unwrap();
    db.save().unwrap();

    let db = Database::open(&path).unwrap();
    assert_eq!(db.len(), 1);

    let series = db.get("Foobar").unwrap();
    assert_eq!(series.template, "/media/foo{}bar.mkv");
    assert_eq!(series.current_ep, 1);
    assert_eq!(series.len(), 12);
    assert!(!series.finished());
}

#[test]
fn test_watch_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("series.csv");

    let mut db = Database::open(&path).unwrap();
    db.add(Series::new(
        "Foobar".to_string(),
        "foo{}".to_string(),
        1,
        3,
    ))
    .unwrap();
    db.get_mut("Foobar").unwrap().watch_current();
    db.save().unwrap();

    let db = Database::open(&path).unwrap();
    let series = db.get("Foobar").unwrap();
    assert_eq!(series.current_ep, 2);
    assert!(series.episode(1).unwrap().watched());
    assert!(!series.episode(2).unwrap().watched());
    assert!(series.episode(1).unwrap().first_watched.is_some());
}

#[test]
fn test_duplicate_series_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("series.csv");

    let mut db = Database::open(&path).unwrap();
    db.add(Series::new("Foo".to_string(), "foo{}".to_string(), 1, 2))
        .unwrap();
    let err = db
        .add(Series::new("Foo".to_string(), "other{}".to_string(), 1, 2))
        .unwrap_err();
    assert!(matches!(err, Error::SeriesAlreadyExists(_)));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let err = Database::open(&temp_dir.path().join("series.json")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn test_multiple_series_keep_file_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("series.csv");

    let mut db = Database::open(&path).unwrap();
    db.add(Series::new("Beta".to_string(), "b{}".to_string(), 1, 2))
        .unwrap();
    db.add(Series::new("Alpha".to_string(), "a{}".to_string(), 1, 2))
        .unwrap();
    db.save().unwrap();

    let db = Database::open(&path).unwrap();
    let names: Vec<&str> = db.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha"]);
}
