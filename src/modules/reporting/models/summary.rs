use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scalar rollup over a record collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    pub count: usize,
    pub total: Decimal,
    /// total / count, 0 for an empty collection
    pub average: Decimal,
    /// Largest single amount, 0 for an empty collection
    pub max: Decimal,
}

/// Per-group rollup with its share of the grand total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category name, or service name for sales
    pub key: String,
    pub count: usize,
    /// Sum of record units (sale quantities; equals count for other records)
    pub units: Decimal,
    pub total: Decimal,
    /// total / count
    pub average: Decimal,
    /// total / units, 0 when no units
    pub average_rate: Decimal,
    /// 100 × total / grand total, 0 when the grand total is 0
    pub percentage: Decimal,
}

impl CategorySummary {
    pub(crate) fn open(key: String) -> Self {
        Self {
            key,
            count: 0,
            units: Decimal::ZERO,
            total: Decimal::ZERO,
            average: Decimal::ZERO,
            average_rate: Decimal::ZERO,
            percentage: Decimal::ZERO,
        }
    }
}
