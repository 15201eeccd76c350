//! Database in CSV format.
//!
//! One row per series: `name, template, current_ep` followed by the watch
//! history in groups of three (`episode_number, first_watched,
//! last_watched`). Timestamps are RFC 3339, absent values empty fields.
//! Rows are headerless and variable-length, so the reader runs in flexible
//! mode.

use crate::models::episode::Episode;
use crate::models::series::Series;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Read all series from a CSV database file.
pub fn read(path: &Path) -> Result<Vec<Series>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut all_series = Vec::new();
    for record in reader.records() {
        let record = record?;
        all_series.push(decode_record(&record)?);
    }

    Ok(all_series)
}

/// Write all series to a CSV database file.
pub fn write(path: &Path, all_series: &[Series]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)?;

    for series in all_series {
        let mut row: Vec<String> = Vec::with_capacity(3 + series.episodes.len() * 3);
        row.push(series.name.clone());
        row.push(series.template.clone());
        row.push(series.current_ep.to_string());

        for ep in &series.episodes {
            row.push(ep.number.to_string());
            row.push(encode_timestamp(ep.first_watched));
            row.push(encode_timestamp(ep.last_watched));
        }

        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

fn decode_record(record: &csv::StringRecord) -> Result<Series> {
    if record.len() < 3 {
        return Err(malformed(record, "expected name, template, current_ep"));
    }

    let name = record[0].to_string();
    let template = record[1].to_string();
    let current_ep: u32 = record[2]
        .parse()
        .map_err(|_| malformed(record, "current_ep is not a number"))?;

    let history: Vec<&str> = record.iter().skip(3).collect();
    if history.len() % 3 != 0 {
        return Err(malformed(record, "history fields are not in groups of three"));
    }

    let mut episodes = Vec::with_capacity(history.len() / 3);
    for chunk in history.chunks(3) {
        let number: u32 = chunk[0]
            .parse()
            .map_err(|_| malformed(record, "episode number is not a number"))?;
        episodes.push(Episode::with_history(
            number,
            decode_timestamp(chunk[1])?,
            decode_timestamp(chunk[2])?,
        ));
    }

    Ok(Series::with_history(name, template, current_ep, episodes))
}

fn encode_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339()).unwrap_or_default()
}

fn decode_timestamp(field: &str) -> Result<Option<DateTime<Utc>>> {
    if field.is_empty() {
        return Ok(None);
    }

    DateTime::parse_from_rfc3339(field)
        .map(|t| Some(t.with_timezone(&Utc)))
        .map_err(|e| Error::MalformedRecord(format!("bad timestamp {field}: {e}")))
}

fn malformed(record: &csv::StringRecord, reason: &str) -> Error {
    let row = record.iter().collect::<Vec<_>>().join(",");
    Error::MalformedRecord(format!("{reason}: {row}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_record_without_history() {
        let record = csv::StringRecord::from(vec!["Foo", "foo{}", "1"]);
        let series = decode_record(&record).unwrap();
        assert_eq!(series.name, "Foo");
        assert_eq!(series.template, "foo{}");
        assert_eq!(series.current_ep, 1);
        assert!(series.is_empty());
    }

    #[test]
    fn test_decode_record_with_history() {
        let record = csv::StringRecord::from(vec![
            "Foo",
            "foo{}",
            "5",
            "4",
            "",
            "",
            "5",
            "2016-10-21T23:42:12+00:00",
            "",
        ]);
        let series = decode_record(&record).unwrap();
        assert_eq!(series.len(), 2);
        assert!(series.episode(5).unwrap().first_watched.is_some());
        assert!(series.episode(4).unwrap().first_watched.is_none());
    }

    #[test]
    fn test_decode_rejects_ragged_history() {
        let record = csv::StringRecord::from(vec!["Foo", "foo{}", "1", "4", ""]);
        assert!(matches!(
            decode_record(&record),
            Err(Error::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let record = csv::StringRecord::from(vec!["Foo", "foo{}", "1", "4", "yesterday", ""]);
        assert!(matches!(
            decode_record(&record),
            Err(Error::MalformedRecord(_))
        ));
    }
}
