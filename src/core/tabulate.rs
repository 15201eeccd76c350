//! Series report tabulation.
//!
//! Renders a list of series as an aligned plain-text table. Column widths
//! are computed from the rendered cell contents; dates are shown in
//! `YYYY-MM-DD` format and absent values as `-`.

use crate::models::series::Series;
use chrono::{DateTime, Utc};

const LABELS: [&str; 6] = ["Name", "Next", "Final", "Started", "Finished", "Template"];

/// Tabulate the given series. Empty input renders an empty string.
pub fn tabulate(series: &[&Series]) -> String {
    if series.is_empty() {
        return String::new();
    }

    let rows: Vec<[String; 6]> = series.iter().map(|s| render_row(s)).collect();

    let mut widths: Vec<usize> = LABELS.iter().map(|l| l.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_row(&LABELS.map(String::from), &widths));
    for row in &rows {
        lines.push(join_row(row, &widths));
    }

    lines.join("\n")
}

fn render_row(series: &Series) -> [String; 6] {
    [
        series.name.clone(),
        series.current_ep.to_string(),
        series
            .final_ep()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string()),
        render_date(series.started_at()),
        render_date(series.finished_at()),
        series.template.clone(),
    ]
}

fn render_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

fn join_row(cells: &[String; 6], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::episode::Episode;

    #[test]
    fn test_empty_input_renders_empty_string() {
        assert_eq!(tabulate(&[]), "");
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let short = Series::new("Foo".to_string(), "foo{}".to_string(), 1, 12);
        let long = Series::new(
            "A much longer series name".to_string(),
            "long{}name".to_string(),
            1,
            3,
        );

        let table = tabulate(&[&short, &long]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);

        let name_col = lines
            .iter()
            .map(|l| l.find(" | ").unwrap())
            .collect::<Vec<_>>();
        assert!(name_col.iter().all(|&w| w == name_col[0]));
    }

    #[test]
    fn test_watched_series_shows_dates() {
        let mut series = Series::with_history(
            "Foo".to_string(),
            "foo{}".to_string(),
            1,
            vec![Episode::new(1), Episode::new(2)],
        );
        series.watch_current();

        let table = tabulate(&[&series]);
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        assert!(table.contains(&today));
    }
}
