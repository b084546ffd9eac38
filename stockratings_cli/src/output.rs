use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value};
use stockratings_api::types::Rating;
use stockratings_api::Column;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

// -- Row builders --

fn cell(rating: &Rating, column: Column) -> String {
    match column {
        Column::Ticker => rating.ticker.clone(),
        Column::Company => rating.company.clone(),
        Column::Brokerage => rating.brokerage.clone().unwrap_or_default(),
        Column::TargetFrom => rating.target_from.clone(),
        Column::TargetTo => rating.target_to.clone(),
        Column::TargetDelta => rating.target_delta.clone(),
        Column::Action => rating.action.to_string(),
        Column::RatingFrom => rating.rating_from.to_string(),
        Column::RatingTo => rating.rating_to.to_string(),
        Column::Score => format_score(rating.score),
        Column::At => rating.at.clone(),
    }
}

fn build_rating_rows(ratings: &[Rating], columns: &[Column]) -> Vec<Vec<String>> {
    ratings
        .iter()
        .map(|r| columns.iter().map(|c| cell(r, *c)).collect())
        .collect()
}

fn build_table(ratings: &[Rating], columns: &[Column]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.title().to_string()));
    for row in build_rating_rows(ratings, columns) {
        builder.push_record(row);
    }
    builder.build()
}

// -- Table output --

pub fn print_ratings_table(ratings: &[Rating], columns: &[Column]) {
    println!("{}", build_table(ratings, columns));
}

// -- Markdown output --

pub fn print_ratings_markdown(ratings: &[Rating], columns: &[Column]) {
    let mut table = build_table(ratings, columns);
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn write_ratings_csv<W: Write>(writer: W, ratings: &[Rating], columns: &[Column]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(columns.iter().map(|c| c.title()))?;
    for row in build_rating_rows(ratings, columns) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_ratings_csv(ratings: &[Rating], columns: &[Column]) -> Result<()> {
    write_ratings_csv(std::io::stdout(), ratings, columns)
}

// -- JSON output --

/// Projects each rating onto the visible columns, keyed by wire name.
pub fn ratings_to_json(ratings: &[Rating], columns: &[Column]) -> Vec<Map<String, Value>> {
    ratings
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| {
                    let value = match c {
                        Column::Score => serde_json::json!(r.score),
                        Column::Brokerage => r
                            .brokerage
                            .as_ref()
                            .map_or(Value::Null, |b| Value::String(b.clone())),
                        _ => Value::String(cell(r, *c)),
                    };
                    (c.to_string(), value)
                })
                .collect()
        })
        .collect()
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.2}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_ratings_fixture() -> Vec<Rating> {
        let json_str = include_str!("../../stockratings_api/tests/fixtures/ratings.json");
        serde_json::from_str(json_str).unwrap()
    }

    // -- format_score tests --

    #[test]
    fn test_format_score_whole() {
        assert_eq!(format_score(9.0), "9");
        assert_eq!(format_score(-3.0), "-3");
    }

    #[test]
    fn test_format_score_fraction() {
        assert_eq!(format_score(0.5), "0.50");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_rating_rows_mapping() {
        let ratings = load_ratings_fixture();
        let rows = build_rating_rows(&ratings, &Column::ALL);
        assert_eq!(rows.len(), 3);

        let row = &rows[0];
        assert_eq!(
            row,
            &vec![
                "AAPL",
                "Apple Inc.",
                "Morgan Stanley",
                "$210.00",
                "$235.00",
                "$25.00",
                "up",
                "hold",
                "buy",
                "9",
                "2025-01-14 00:30:05.813548892 +0000 UTC",
            ]
        );
        assert_eq!(rows[1][2], "");
    }

    #[test]
    fn test_build_rating_rows_respects_columns() {
        let ratings = load_ratings_fixture();
        let rows = build_rating_rows(&ratings, &[Column::Ticker, Column::RatingTo]);
        assert_eq!(rows[2], vec!["NVDA", "pending"]);
    }

    #[test]
    fn test_table_only_has_visible_headers() {
        let ratings = load_ratings_fixture();
        let rendered = build_table(&ratings, &[Column::Ticker, Column::Score]).to_string();
        assert!(rendered.contains("Ticker"));
        assert!(rendered.contains("Score"));
        assert!(!rendered.contains("Company"));
        assert!(rendered.contains("NVDA"));
    }

    #[test]
    fn test_csv_output() {
        let ratings = load_ratings_fixture();
        let mut buf = Vec::new();
        write_ratings_csv(&mut buf, &ratings, &[Column::Ticker, Column::Company]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ticker,Company");
        assert_eq!(lines[1], "AAPL,Apple Inc.");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_json_projection() {
        let ratings = load_ratings_fixture();
        let json = ratings_to_json(&ratings, &[Column::Ticker, Column::Brokerage, Column::Score]);
        assert_eq!(json[0]["ticker"], "AAPL");
        assert_eq!(json[0]["score"], 9.0);
        assert_eq!(json[1]["brokerage"], Value::Null);
        assert!(!json[0].contains_key("company"));
    }
}
