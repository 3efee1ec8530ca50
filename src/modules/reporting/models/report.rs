use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategorySummary, KpiSummary, TrendSeries};
use crate::core::calendar::format_day;
use crate::core::money::{round_amount, round_percentage};

/// Everything a summary view renders for one filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub kpis: KpiSummary,
    /// Sorted by total descending
    pub breakdown: Vec<CategorySummary>,
    pub trend: TrendSeries,
    /// Day range the trend covers
    pub trend_from: NaiveDate,
    pub trend_to: NaiveDate,
}

/// JSON shape of a [`SummaryReport`]; ratios rounded for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub kpis: KpiResponse,
    pub breakdown: Vec<CategorySummaryResponse>,
    pub trend: TrendResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiResponse {
    pub count: usize,
    pub total: Decimal,
    pub average: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryResponse {
    pub key: String,
    pub count: usize,
    pub units: Decimal,
    pub total: Decimal,
    pub average: Decimal,
    pub average_rate: Decimal,
    pub percentage: Decimal,
}

/// Parallel label/value/count sequences, ready for a line chart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub date_from: String,
    pub date_to: String,
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
    pub counts: Vec<u64>,
}

impl From<KpiSummary> for KpiResponse {
    fn from(kpis: KpiSummary) -> Self {
        Self {
            count: kpis.count,
            total: kpis.total,
            average: round_amount(kpis.average),
            max: kpis.max,
        }
    }
}

impl From<CategorySummary> for CategorySummaryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            key: summary.key,
            count: summary.count,
            units: summary.units,
            total: summary.total,
            average: round_amount(summary.average),
            average_rate: round_amount(summary.average_rate),
            percentage: round_percentage(summary.percentage),
        }
    }
}

impl From<SummaryReport> for SummaryResponse {
    fn from(report: SummaryReport) -> Self {
        Self {
            kpis: report.kpis.into(),
            breakdown: report
                .breakdown
                .into_iter()
                .map(CategorySummaryResponse::from)
                .collect(),
            trend: TrendResponse {
                date_from: format_day(report.trend_from),
                date_to: format_day(report.trend_to),
                labels: report.trend.labels(),
                values: report.trend.values(),
                counts: report.trend.counts(),
            },
        }
    }
}
