use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{format_rupees, percent_change, round_percentage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn of(change: Decimal) -> Self {
        if change > Decimal::ZERO {
            Trend::Up
        } else if change < Decimal::ZERO {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

/// Header card: a current figure compared with its previous period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub title: String,
    /// Display value, e.g. "₹4,250"
    pub value: String,
    pub amount: Decimal,
    pub change_percent: Decimal,
    /// e.g. "+15% vs yesterday"
    pub subtext: String,
    pub trend: Trend,
}

impl KpiCard {
    pub fn compare(title: &str, current: Decimal, previous: Decimal, period: &str) -> Self {
        let change = round_percentage(percent_change(current, previous));
        let sign = if change > Decimal::ZERO { "+" } else { "" };

        Self {
            title: title.to_string(),
            value: format_rupees(current),
            amount: current,
            change_percent: change,
            subtext: format!("{}{}% vs {}", sign, change.normalize(), period),
            trend: Trend::of(change),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sale,
    Expense,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Warning,
}

/// One line of the recent-activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    /// Formatted rupee amount; absent for alerts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub date: NaiveDateTime,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub month: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBreakdown {
    pub service: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataSets {
    pub daily_revenue: Vec<DailyRevenue>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub service_breakdown: Vec<ServiceBreakdown>,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub as_of: NaiveDate,
    pub kpis: Vec<KpiCard>,
    pub recent_activities: Vec<RecentActivity>,
    pub charts: ChartDataSets,
}
