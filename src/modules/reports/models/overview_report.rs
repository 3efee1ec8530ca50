use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{round_amount, round_percentage};

/// Revenue against expenses over a date range, with the service mix behind
/// the revenue
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewReport {
    /// Start of the reporting period (inclusive)
    pub start_date: NaiveDate,
    /// End of the reporting period (inclusive)
    pub end_date: NaiveDate,
    /// One entry per day of the period, oldest first
    pub revenue_expense: Vec<RevenueExpensePoint>,
    /// Revenue per service, largest first
    pub service_distribution: Vec<ServiceDistribution>,
    pub totals: OverviewTotals,
}

/// Paired daily totals for the comparison bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueExpensePoint {
    pub date: NaiveDate,
    /// Chart label, e.g. "Dec 10"
    pub label: String,
    pub revenue: Decimal,
    pub expense: Decimal,
}

/// A service's share of revenue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDistribution {
    pub service: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewTotals {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    /// Number of sales in the period
    pub total_transactions: usize,
}

impl OverviewTotals {
    pub fn new(total_revenue: Decimal, total_expenses: Decimal, total_transactions: usize) -> Self {
        Self {
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            total_transactions,
        }
    }
}

impl OverviewReport {
    /// True when the period holds neither sales nor expenses
    pub fn is_empty(&self) -> bool {
        self.totals.total_transactions == 0 && self.totals.total_expenses.is_zero()
    }
}

/// Response structure for the overview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub start_date: String, // Format: YYYY-MM-DD
    pub end_date: String,   // Format: YYYY-MM-DD
    pub revenue_expense: Vec<RevenueExpensePoint>,
    pub service_distribution: Vec<ServiceDistribution>,
    pub kpis: OverviewTotals,
}

impl From<OverviewReport> for OverviewResponse {
    fn from(report: OverviewReport) -> Self {
        Self {
            start_date: report.start_date.format("%Y-%m-%d").to_string(),
            end_date: report.end_date.format("%Y-%m-%d").to_string(),
            revenue_expense: report.revenue_expense,
            service_distribution: report
                .service_distribution
                .into_iter()
                .map(|s| ServiceDistribution {
                    amount: round_amount(s.amount),
                    percentage: round_percentage(s.percentage),
                    ..s
                })
                .collect(),
            kpis: report.totals,
        }
    }
}
