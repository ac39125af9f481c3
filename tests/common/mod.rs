#![allow(dead_code)]

use chrono::NaiveDate;
use ruota::domain::draw::{DrawDataset, DrawRecord};
use ruota::domain::error::RuotaError;
use ruota::domain::wheel::Wheel;
use ruota::ports::data_port::DrawSource;
use std::cell::Cell;

pub struct MockDrawSource {
    pub records: Vec<DrawRecord>,
    pub error: Option<String>,
    pub loads: Cell<usize>,
}

impl MockDrawSource {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
            loads: Cell::new(0),
        }
    }

    pub fn with_record(mut self, record: DrawRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl DrawSource for MockDrawSource {
    fn load_draws(&self) -> Result<DrawDataset, RuotaError> {
        self.loads.set(self.loads.get() + 1);
        if let Some(reason) = &self.error {
            return Err(RuotaError::DataRead {
                reason: reason.clone(),
            });
        }
        Ok(DrawDataset::new(self.records.clone()))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(day: NaiveDate, draws: &[(Wheel, [i64; 5])]) -> DrawRecord {
    draws
        .iter()
        .fold(DrawRecord::new(day), |rec, (wheel, numbers)| {
            rec.with_draw(*wheel, *numbers)
        })
}

/// Weekly draws starting at `start`; each wheel's numbers shift by its index.
pub fn generate_records(start: NaiveDate, count: usize) -> Vec<DrawRecord> {
    (0..count)
        .map(|i| {
            let day = start + chrono::Duration::days(7 * i as i64);
            Wheel::ALL.iter().fold(DrawRecord::new(day), |rec, wheel| {
                let base = ((i * 5 + wheel.index() * 3) % 86) as i64 + 1;
                rec.with_draw(*wheel, [base, base + 1, base + 2, base + 3, base + 4])
            })
        })
        .collect()
}

pub const CSV_HEADER: &str = "Data,Bari,Bari,Bari,Bari,Bari,Cagliari,Cagliari,Cagliari,Cagliari,Cagliari,\
Firenze,Firenze,Firenze,Firenze,Firenze,Genova,Genova,Genova,Genova,Genova,\
Milano,Milano,Milano,Milano,Milano,Napoli,Napoli,Napoli,Napoli,Napoli,\
Palermo,Palermo,Palermo,Palermo,Palermo,Roma,Roma,Roma,Roma,Roma,\
Torino,Torino,Torino,Torino,Torino,Venezia,Venezia,Venezia,Venezia,Venezia,\
Nazionale,Nazionale,Nazionale,Nazionale,Nazionale";

/// One CSV row with `roma` on the Roma wheel and empty cells elsewhere.
pub fn csv_row(day: &str, roma: [u8; 5]) -> String {
    let mut cells = vec![day.to_string()];
    for wheel in Wheel::ALL {
        for slot in 0..5 {
            if wheel == Wheel::Roma {
                cells.push(roma[slot].to_string());
            } else {
                cells.push(String::new());
            }
        }
    }
    cells.join(",")
}
