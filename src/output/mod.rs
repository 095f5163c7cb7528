pub mod table;

use crate::domain::model::{Category, ConstructorStanding, DriverStanding, RaceResult};
use crate::utils::error::Result;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const CAPTION_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// A record that can be shown as one table row.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<&str>;
}

impl Tabular for DriverStanding {
    const HEADERS: &'static [&'static str] = &["POS", "DRIVER", "NATION", "TEAM", "PTS"];

    fn cells(&self) -> Vec<&str> {
        vec![
            self.position.as_str(),
            self.name.as_str(),
            self.nationality.as_str(),
            self.team.as_str(),
            self.points.as_str(),
        ]
    }
}

impl Tabular for ConstructorStanding {
    const HEADERS: &'static [&'static str] = &["POS", "TEAM", "PTS"];

    fn cells(&self) -> Vec<&str> {
        vec![self.position.as_str(), self.name.as_str(), self.points.as_str()]
    }
}

impl Tabular for RaceResult {
    const HEADERS: &'static [&'static str] = &["GRAND PRIX", "DATE", "WINNER", "CAR", "LAPS", "TIME"];

    fn cells(&self) -> Vec<&str> {
        vec![
            self.grand_prix.as_str(),
            self.date.as_str(),
            self.winner.as_str(),
            self.car.as_str(),
            self.laps.as_str(),
            self.time.as_str(),
        ]
    }
}

pub fn caption<Tz>(category: Category, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let title = match category {
        Category::Drivers => "Current Driver standings",
        Category::Constructors => "Current constructor standings",
        Category::Races => "Race results",
    };
    format!("{} as of {}", title, now.format(CAPTION_TIME_FORMAT))
}

pub fn no_data_message(category: Category) -> String {
    format!(
        "No {} data found or an error occurred while fetching.",
        category.label()
    )
}

/// Writes `records` to `out` in the chosen format.
///
/// The table format carries a caption and prints the no-data message in place of an
/// empty table. JSON and CSV stay machine-readable on `out` and send the no-data
/// message to `err` instead.
pub fn present<T, W, E, Tz>(
    out: &mut W,
    err: &mut E,
    category: Category,
    records: &[T],
    format: OutputFormat,
    now: &DateTime<Tz>,
) -> Result<()>
where
    T: Tabular + Serialize,
    W: Write,
    E: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match format {
        OutputFormat::Table => {
            writeln!(out)?;
            writeln!(out, "{}", caption(category, now))?;
            if records.is_empty() {
                writeln!(out, "{}", no_data_message(category))?;
            } else {
                let rows: Vec<Vec<&str>> = records.iter().map(|r| r.cells()).collect();
                out.write_all(table::render(T::HEADERS, &rows).as_bytes())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(T::HEADERS)?;
            for record in records {
                writer.write_record(record.cells())?;
            }
            writer.flush()?;
        }
    }

    if records.is_empty() && format != OutputFormat::Table {
        writeln!(err, "{}", no_data_message(category))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 8, 15, 4, 5).unwrap()
    }

    fn teams() -> Vec<ConstructorStanding> {
        vec![
            ConstructorStanding {
                position: "1".to_string(),
                name: "McLaren Mercedes".to_string(),
                points: "666".to_string(),
            },
            ConstructorStanding {
                position: "2".to_string(),
                name: "Ferrari".to_string(),
                points: "652".to_string(),
            },
        ]
    }

    fn present_to_strings<T: Tabular + Serialize>(
        category: Category,
        records: &[T],
        format: OutputFormat,
    ) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        present(&mut out, &mut err, category, records, format, &now()).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_caption_format() {
        assert_eq!(
            caption(Category::Drivers, &now()),
            "Current Driver standings as of 08.12.2024 15:04:05"
        );
        assert_eq!(
            caption(Category::Races, &now()),
            "Race results as of 08.12.2024 15:04:05"
        );
    }

    #[test]
    fn test_present_table() {
        let (out, err) = present_to_strings(Category::Constructors, &teams(), OutputFormat::Table);

        assert!(out.contains("Current constructor standings as of 08.12.2024 15:04:05"));
        assert!(out.contains("| McLaren Mercedes |"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_present_empty_table_prints_message() {
        let (out, err) =
            present_to_strings::<DriverStanding>(Category::Drivers, &[], OutputFormat::Table);

        assert!(out.contains("No driver data found or an error occurred while fetching."));
        assert!(!out.contains('+'));
        assert!(err.is_empty());
    }

    #[test]
    fn test_present_json() {
        let (out, _) = present_to_strings(Category::Constructors, &teams(), OutputFormat::Json);

        let parsed: Vec<ConstructorStanding> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, teams());
    }

    #[test]
    fn test_present_csv() {
        let (out, _) = present_to_strings(Category::Constructors, &teams(), OutputFormat::Csv);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["POS,TEAM,PTS", "1,McLaren Mercedes,666", "2,Ferrari,652"]);
    }

    #[test]
    fn test_present_empty_csv_reports_on_err() {
        let (out, err) =
            present_to_strings::<RaceResult>(Category::Races, &[], OutputFormat::Csv);

        assert_eq!(out.trim(), "GRAND PRIX,DATE,WINNER,CAR,LAPS,TIME");
        assert!(err.contains("No race data found"));
    }
}
