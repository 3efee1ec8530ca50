use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::saturating_sum;

/// One bucket of a trend series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar day (or first day of the month for monthly series)
    pub date: NaiveDate,
    pub label: String,
    pub value: Decimal,
    pub count: u64,
}

/// Zero-filled, chronologically ordered time series for charting
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new(points: Vec<TrendPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.count).collect()
    }

    /// Sum of all bucket values
    pub fn total(&self) -> Decimal {
        saturating_sum(self.points.iter().map(|p| p.value))
    }
}
