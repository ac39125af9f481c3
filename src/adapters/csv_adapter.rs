//! CSV draw archive adapter.
//!
//! Layout: optional preamble lines, then a header row with a `Data`/`Date`
//! column and five columns per wheel. Positions 2..5 of a wheel may be named
//! `Bari2`, `Bari 2`, `Bari_2`, `Bari.1` (spreadsheet export), or simply
//! repeat `Bari`. Number cells that are blank, non-numeric or outside 1..90
//! become absent slots; rows with an unreadable date are skipped.

use std::fs;
use std::path::PathBuf;

use crate::domain::draw::{DrawDataset, DrawRecord, parse_draw_date};
use crate::domain::error::RuotaError;
use crate::domain::number_set::{Number, to_number};
use crate::domain::wheel::{SLOTS_PER_DRAW, WHEEL_COUNT, Wheel};
use crate::ports::data_port::DrawSource;

const DATE_HEADERS: [&str; 2] = ["data", "date"];

/// Counters gathered while reading an archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub rows_read: usize,
    pub records: usize,
    pub skipped_rows: usize,
    pub malformed_cells: usize,
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnMap {
    date: usize,
    wheels: [[Option<usize>; SLOTS_PER_DRAW]; WHEEL_COUNT],
}

#[derive(Debug)]
pub struct CsvAdapter {
    path: PathBuf,
    skip_rows: usize,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path, skip_rows: 0 }
    }

    /// Number of preamble lines before the header row.
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// Parses archive content already in memory.
    pub fn parse_str(&self, content: &str) -> Result<(DrawDataset, IngestSummary), RuotaError> {
        let body = skip_lines(content, self.skip_rows);
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(body.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| RuotaError::DataRead {
                reason: format!("CSV header error: {}", e),
            })?
            .clone();
        let columns = self.resolve_columns(&headers)?;

        let mut summary = IngestSummary::default();
        let mut records = Vec::new();

        for result in rdr.records() {
            let row = result.map_err(|e| RuotaError::DataRead {
                reason: format!("CSV parse error: {}", e),
            })?;
            summary.rows_read += 1;

            let Some(date) = row.get(columns.date).and_then(parse_draw_date) else {
                tracing::debug!(row = summary.rows_read, "skipping row without a readable date");
                summary.skipped_rows += 1;
                continue;
            };

            let mut record = DrawRecord::new(date);
            for wheel in Wheel::ALL {
                for (slot, column) in columns.wheels[wheel.index()].iter().enumerate() {
                    let Some(cell) = column.and_then(|c| row.get(c)) else {
                        continue;
                    };
                    if cell.is_empty() {
                        continue;
                    }
                    match parse_number(cell) {
                        Some(n) => record.set_slot(wheel, slot, Some(n)),
                        None => summary.malformed_cells += 1,
                    }
                }
            }
            records.push(record);
        }

        summary.records = records.len();
        if summary.skipped_rows > 0 {
            tracing::warn!(
                "{}: skipped {} rows with unreadable dates",
                self.describe(),
                summary.skipped_rows
            );
        }
        if summary.malformed_cells > 0 {
            tracing::warn!(
                "{}: treated {} malformed number cells as absent",
                self.describe(),
                summary.malformed_cells
            );
        }

        Ok((DrawDataset::new(records), summary))
    }

    fn resolve_columns(&self, headers: &csv::StringRecord) -> Result<ColumnMap, RuotaError> {
        let mut date = None;
        let mut wheels = [[None; SLOTS_PER_DRAW]; WHEEL_COUNT];

        for (idx, header) in headers.iter().enumerate() {
            if DATE_HEADERS.contains(&header.to_lowercase().as_str()) {
                date.get_or_insert(idx);
                continue;
            }
            let Some((wheel, position)) = match_wheel_header(header) else {
                continue;
            };
            let slots = &mut wheels[wheel.index()];
            let target = match position {
                Some(p) => Some(p),
                None => slots.iter().position(Option::is_none),
            };
            if let Some(p) = target {
                if slots[p].is_none() {
                    slots[p] = Some(idx);
                }
            }
        }

        let date = date.ok_or_else(|| RuotaError::Schema {
            source_name: self.describe(),
            reason: "missing date column (expected 'Data' or 'Date')".into(),
        })?;

        let missing: Vec<&str> = Wheel::ALL
            .iter()
            .filter(|w| wheels[w.index()].iter().all(Option::is_none))
            .map(|w| w.name())
            .collect();
        if missing.len() == WHEEL_COUNT {
            return Err(RuotaError::Schema {
                source_name: self.describe(),
                reason: "no wheel columns recognised".into(),
            });
        }
        if !missing.is_empty() {
            tracing::warn!(
                "{}: no columns for {}; treated as never drawn",
                self.describe(),
                missing.join(", ")
            );
        }

        Ok(ColumnMap { date, wheels })
    }
}

impl DrawSource for CsvAdapter {
    fn load_draws(&self) -> Result<DrawDataset, RuotaError> {
        let content = fs::read_to_string(&self.path).map_err(|e| RuotaError::DataRead {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        let (dataset, summary) = self.parse_str(&content)?;
        tracing::info!(
            "Loaded {} draws from {} ({} rows read)",
            summary.records,
            self.path.display(),
            summary.rows_read
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn skip_lines(content: &str, count: usize) -> &str {
    let mut rest = content;
    for _ in 0..count {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

/// Maps a header to its wheel and, when explicit, its zero-based slot.
fn match_wheel_header(header: &str) -> Option<(Wheel, Option<usize>)> {
    let lower = header.to_lowercase();
    for wheel in Wheel::ALL {
        let name = wheel.name().to_lowercase();
        let Some(suffix) = lower.strip_prefix(&name) else {
            continue;
        };
        if suffix.is_empty() {
            return Some((wheel, None));
        }
        // Spreadsheet de-duplication: Bari, Bari.1 .. Bari.4
        if let Some(n) = suffix.strip_prefix('.') {
            return match n.parse::<usize>() {
                Ok(k) if (1..SLOTS_PER_DRAW).contains(&k) => Some((wheel, Some(k))),
                _ => None,
            };
        }
        let n = suffix.trim_start_matches([' ', '_']);
        return match n.parse::<usize>() {
            Ok(k) if (1..=SLOTS_PER_DRAW).contains(&k) => Some((wheel, Some(k - 1))),
            _ => None,
        };
    }
    None
}

/// Accepts integral values, including spreadsheet floats like `23.0`.
fn parse_number(cell: &str) -> Option<Number> {
    if let Ok(v) = cell.parse::<i64>() {
        return to_number(v);
    }
    let v = cell.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 {
        to_number(v as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn header_with(style: impl Fn(&str, usize) -> String) -> String {
        let mut cols = vec!["Data".to_string()];
        for wheel in Wheel::ALL {
            for pos in 0..SLOTS_PER_DRAW {
                cols.push(style(wheel.name(), pos));
            }
        }
        cols.join(",")
    }

    fn row(date: &str, fill: impl Fn(Wheel, usize) -> String) -> String {
        let mut cols = vec![date.to_string()];
        for wheel in Wheel::ALL {
            for pos in 0..SLOTS_PER_DRAW {
                cols.push(fill(wheel, pos));
            }
        }
        cols.join(",")
    }

    fn numbered(wheel: Wheel, pos: usize) -> String {
        (wheel.index() * SLOTS_PER_DRAW + pos + 1).to_string()
    }

    fn adapter() -> CsvAdapter {
        CsvAdapter::new(PathBuf::from("test.csv"))
    }

    #[test]
    fn match_wheel_header_conventions() {
        assert_eq!(match_wheel_header("Bari"), Some((Wheel::Bari, None)));
        assert_eq!(match_wheel_header("bari.1"), Some((Wheel::Bari, Some(1))));
        assert_eq!(match_wheel_header("Roma2"), Some((Wheel::Roma, Some(1))));
        assert_eq!(match_wheel_header("Roma 5"), Some((Wheel::Roma, Some(4))));
        assert_eq!(match_wheel_header("ROMA_3"), Some((Wheel::Roma, Some(2))));
        assert_eq!(match_wheel_header("Roma.5"), None);
        assert_eq!(match_wheel_header("Roma6"), None);
        assert_eq!(match_wheel_header("Concorso"), None);
    }

    #[test]
    fn parse_number_cells() {
        assert_eq!(parse_number("23"), Some(23));
        assert_eq!(parse_number("23.0"), Some(23));
        assert_eq!(parse_number("23.5"), None);
        assert_eq!(parse_number("0"), None);
        assert_eq!(parse_number("91"), None);
        assert_eq!(parse_number("x"), None);
    }

    #[test]
    fn suffixed_headers() {
        let content = format!(
            "{}\n{}\n",
            header_with(|name, pos| if pos == 0 {
                name.to_string()
            } else {
                format!("{}{}", name, pos + 1)
            }),
            row("2024-01-02", numbered),
        );
        let (ds, summary) = adapter().parse_str(&content).unwrap();
        assert_eq!(summary.records, 1);
        assert_eq!(
            ds.numbers_drawn(date(2024, 1, 2), Wheel::Bari).to_vec(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(
            ds.numbers_drawn(date(2024, 1, 2), Wheel::Nazionale).to_vec(),
            vec![51, 52, 53, 54, 55]
        );
    }

    #[test]
    fn repeated_headers_fill_slots_in_order() {
        let content = format!(
            "{}\n{}\n",
            header_with(|name, _| name.to_string()),
            row("2024-01-02", numbered),
        );
        let (ds, _) = adapter().parse_str(&content).unwrap();
        assert_eq!(ds.records()[0].slots(Wheel::Roma)[4], Some(40));
    }

    #[test]
    fn dotted_headers_after_preamble() {
        let content = format!(
            "Archivio estrazioni\nfonte: test\n\n{}\n{}\n{}\n",
            header_with(|name, pos| if pos == 0 {
                name.to_string()
            } else {
                format!("{}.{}", name, pos)
            }),
            row("02/01/2024", numbered),
            row("04/01/2024", numbered),
        );
        let (ds, summary) = adapter().with_skip_rows(3).parse_str(&content).unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(ds.first_date(), Some(date(2024, 1, 2)));
        assert_eq!(ds.last_date(), Some(date(2024, 1, 4)));
    }

    #[test]
    fn malformed_cells_become_absent() {
        let content = format!(
            "{}\n{}\n",
            header_with(|name, pos| format!("{}{}", name, pos + 1)),
            row("2024-01-02", |wheel, pos| match (wheel, pos) {
                (Wheel::Bari, 0) => "abc".into(),
                (Wheel::Bari, 1) => "95".into(),
                (Wheel::Bari, 2) => "".into(),
                (Wheel::Cagliari, _) => "".into(),
                _ => numbered(wheel, pos),
            }),
        );
        let (ds, summary) = adapter().parse_str(&content).unwrap();
        assert_eq!(summary.malformed_cells, 2);
        assert_eq!(ds.numbers_drawn(date(2024, 1, 2), Wheel::Bari).to_vec(), vec![4, 5]);
        assert!(ds.numbers_drawn(date(2024, 1, 2), Wheel::Cagliari).is_empty());
    }

    #[test]
    fn unreadable_dates_are_skipped() {
        let content = format!(
            "{}\n{}\n{}\n",
            header_with(|name, pos| format!("{}{}", name, pos + 1)),
            row("not a date", numbered),
            row("2024-01-05", numbered),
        );
        let (ds, summary) = adapter().parse_str(&content).unwrap();
        assert_eq!(summary.rows_read, 2);
        assert_eq!(summary.skipped_rows, 1);
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn missing_date_column_is_schema_error() {
        let err = adapter()
            .parse_str("Giorno,Bari,Bari2\n2024-01-01,1,2\n")
            .unwrap_err();
        assert!(matches!(err, RuotaError::Schema { .. }));
    }

    #[test]
    fn no_wheel_columns_is_schema_error() {
        let err = adapter().parse_str("Data,Foo,Bar\n2024-01-01,1,2\n").unwrap_err();
        assert!(matches!(err, RuotaError::Schema { .. }));
    }

    #[test]
    fn partial_wheel_columns_are_accepted() {
        let content = "Date,Roma,Roma2,Roma3,Roma4,Roma5\n2024-01-01,1,2,3,4,5\n";
        let (ds, _) = adapter().parse_str(content).unwrap();
        assert_eq!(
            ds.numbers_drawn(date(2024, 1, 1), Wheel::Roma).to_vec(),
            vec![1, 2, 3, 4, 5]
        );
        assert!(ds.numbers_drawn(date(2024, 1, 1), Wheel::Bari).is_empty());
    }

    #[test]
    fn short_rows_are_tolerated() {
        let content = "Date,Roma,Roma2,Roma3,Roma4,Roma5\n2024-01-01,1,2\n";
        let (ds, _) = adapter().parse_str(content).unwrap();
        assert_eq!(ds.numbers_drawn(date(2024, 1, 1), Wheel::Roma).to_vec(), vec![1, 2]);
    }

    #[test]
    fn load_draws_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draws.csv");
        fs::write(&path, "Data,Roma,Roma2,Roma3,Roma4,Roma5\n2024-01-01,1,2,3,4,5\n").unwrap();

        let ds = CsvAdapter::new(path).load_draws().unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn load_draws_missing_file() {
        let err = CsvAdapter::new(PathBuf::from("/nonexistent/draws.csv"))
            .load_draws()
            .unwrap_err();
        assert!(matches!(err, RuotaError::DataRead { .. }));
    }
}
