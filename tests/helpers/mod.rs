// Shared fixtures for the unit and integration tests
//
// `Entry` is a minimal ReportRecord for the engine properties; `test_state`
// builds the full application on seeded, zero-latency stores.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use printdesk::config::StoreConfig;
use printdesk::reporting::ReportRecord;
use printdesk::AppState;

pub const CATEGORIES: [&str; 5] = ["Rent", "Internet", "Electricity", "Maintenance", "Courier"];
pub const NOTES: [&str; 4] = ["A4 Paper Bundles", "Printer Repair", "office tea", ""];

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub at: NaiveDateTime,
    pub category: &'static str,
    pub amount: Decimal,
    pub note: &'static str,
}

impl ReportRecord for Entry {
    fn occurred_at(&self) -> NaiveDateTime {
        self.at
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn group_key(&self) -> &str {
        self.category
    }

    fn filter_key(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.note]
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
}

pub fn base_day() -> NaiveDate {
    day(1)
}

/// Entries spread over the 30 days starting 2025-12-01
pub fn entry_strategy() -> impl Strategy<Value = Entry> {
    (
        0i64..30,
        0i64..(24 * 60),
        0usize..CATEGORIES.len(),
        0i64..5_000_000,
        0usize..NOTES.len(),
    )
        .prop_map(|(offset, minute, category, cents, note)| Entry {
            at: base_day().and_hms_opt(0, 0, 0).unwrap()
                + Duration::days(offset)
                + Duration::minutes(minute),
            category: CATEGORIES[category],
            amount: Decimal::new(cents, 2),
            note: NOTES[note],
        })
}

pub fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry_strategy(), 0..max)
}

/// Seeded application state with no simulated latency
pub fn test_state() -> AppState {
    AppState::from_config(&StoreConfig::instant()).expect("Failed to build test state")
}

/// Decimal carried as a JSON string
pub fn decimal(value: &serde_json::Value) -> Decimal {
    value
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| panic!("Expected a decimal string, got {}", value))
}
