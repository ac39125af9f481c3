//! Draw records and the dataset they form.
//!
//! Records are kept sorted by date. Sorting is stable, so records sharing a
//! date stay in ingestion order: [`DrawDataset::numbers_drawn`] sees the first
//! ingested one, and [`DrawDataset::newest_first`] lists same-date records in
//! ingestion order.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::domain::number_set::{Number, NumberSet, to_number};
use crate::domain::wheel::{SLOTS_PER_DRAW, WHEEL_COUNT, Wheel};

/// Accepted date layouts, tried in order.
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Parses `YYYY-MM-DD`, `DD/MM/YYYY` or `YYYY/MM/DD`, ignoring a trailing time part.
pub fn parse_draw_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let day_part = trimmed.split([' ', 'T']).next().unwrap_or(trimmed);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day_part, fmt).ok())
}

/// The five slots of one wheel on one date. `None` is an absent slot.
pub type WheelSlots = [Option<Number>; SLOTS_PER_DRAW];

#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub date: NaiveDate,
    slots: [WheelSlots; WHEEL_COUNT],
}

impl DrawRecord {
    /// A record for `date` with every wheel absent.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            slots: [[None; SLOTS_PER_DRAW]; WHEEL_COUNT],
        }
    }

    /// Builder: sets all five slots of `wheel`. Values outside 1..90 become absent.
    pub fn with_draw(mut self, wheel: Wheel, numbers: [i64; SLOTS_PER_DRAW]) -> Self {
        for (slot, value) in numbers.into_iter().enumerate() {
            self.set_slot(wheel, slot, to_number(value));
        }
        self
    }

    pub fn set_slot(&mut self, wheel: Wheel, slot: usize, number: Option<Number>) {
        if slot < SLOTS_PER_DRAW {
            self.slots[wheel.index()][slot] = number;
        }
    }

    pub fn slots(&self, wheel: Wheel) -> &WheelSlots {
        &self.slots[wheel.index()]
    }

    /// Numbers drawn on `wheel`, deduplicated. Empty when the wheel is absent.
    pub fn drawn(&self, wheel: Wheel) -> NumberSet {
        self.slots(wheel).iter().flatten().copied().collect()
    }

    pub fn has_draw(&self, wheel: Wheel) -> bool {
        self.slots(wheel).iter().any(Option::is_some)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawDataset {
    records: Vec<DrawRecord>,
}

impl DrawDataset {
    pub fn new(mut records: Vec<DrawRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// First ingested record dated exactly `date`.
    pub fn record_on(&self, date: NaiveDate) -> Option<&DrawRecord> {
        let idx = self.records.partition_point(|r| r.date < date);
        self.records.get(idx).filter(|r| r.date == date)
    }

    /// Numbers drawn on `wheel` on exactly `date`; empty when there is no such
    /// record or the wheel was not drawn.
    pub fn numbers_drawn(&self, date: NaiveDate, wheel: Wheel) -> NumberSet {
        self.record_on(date)
            .map(|r| r.drawn(wheel))
            .unwrap_or_default()
    }

    /// Records ordered by date descending, same-date records in ingestion order.
    pub fn newest_first(&self) -> Vec<&DrawRecord> {
        let mut refs: Vec<&DrawRecord> = self.records.iter().collect();
        refs.sort_by_key(|r| Reverse(r.date));
        refs
    }
}
