use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::core::money::{format_rupees, round_percentage};
use crate::core::{Calendar, Result};
use crate::modules::dashboard::models::{
    ActivityKind, ActivityStatus, ChartDataSets, DailyRevenue, DashboardData, KpiCard,
    MonthlyRevenue, RecentActivity, ServiceBreakdown,
};
use crate::modules::expenses::{Expense, ExpenseService};
use crate::modules::inventory::{InventoryItem, InventoryService};
use crate::modules::reporting::services::trend_bucketizer::{
    day_total, month_to_date_total, previous_month_total,
};
use crate::modules::reporting::{AggregationEngine, TrendBucketizer};
use crate::modules::sales::{Sale, SaleService};

pub const DAILY_REVENUE_DAYS: u32 = 15;
pub const MONTHLY_REVENUE_MONTHS: u32 = 3;
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Assembles the dashboard from the three ledgers
pub struct DashboardService {
    sales: Arc<SaleService>,
    expenses: Arc<ExpenseService>,
    inventory: Arc<InventoryService>,
}

impl DashboardService {
    pub fn new(
        sales: Arc<SaleService>,
        expenses: Arc<ExpenseService>,
        inventory: Arc<InventoryService>,
    ) -> Self {
        Self {
            sales,
            expenses,
            inventory,
        }
    }

    /// Dashboard as seen on `today`
    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardData> {
        let (sales, expenses, items) = futures_util::try_join!(
            self.sales.all_sales(),
            self.expenses.all_expenses(),
            self.inventory.all_items(),
        )?;

        let data = DashboardData {
            as_of: today,
            kpis: kpi_cards(&sales, &expenses, today),
            recent_activities: recent_activities(&sales, &expenses, &items),
            charts: charts(&sales, today),
        };

        info!(
            "Dashboard generated: as_of={}, {} activities",
            today,
            data.recent_activities.len()
        );

        Ok(data)
    }
}

fn kpi_cards(sales: &[Sale], expenses: &[Expense], today: NaiveDate) -> Vec<KpiCard> {
    let yesterday = today - Duration::days(1);

    let income = day_total(sales, today);
    let income_before = day_total(sales, yesterday);
    let spend = day_total(expenses, today);
    let spend_before = day_total(expenses, yesterday);

    vec![
        KpiCard::compare("Today's Income", income, income_before, "yesterday"),
        KpiCard::compare("Today's Expenses", spend, spend_before, "yesterday"),
        KpiCard::compare(
            "Today's Profit",
            income - spend,
            income_before - spend_before,
            "yesterday",
        ),
        KpiCard::compare(
            "Month's Income",
            month_to_date_total(sales, today),
            previous_month_total(sales, today),
            "last month",
        ),
    ]
}

fn charts(sales: &[Sale], today: NaiveDate) -> ChartDataSets {
    let daily_revenue = TrendBucketizer::last_days(sales, DAILY_REVENUE_DAYS, today)
        .points()
        .iter()
        .map(|p| DailyRevenue {
            date: p.date,
            amount: p.value,
        })
        .collect();

    let monthly_revenue = TrendBucketizer::bucketize_monthly(sales, MONTHLY_REVENUE_MONTHS, today)
        .points()
        .iter()
        .map(|p| MonthlyRevenue {
            month: p.label.clone(),
            total: p.value,
        })
        .collect();

    let (_, services) = AggregationEngine::summarize(sales);
    let service_breakdown = services
        .into_iter()
        .map(|s| ServiceBreakdown {
            service: s.key,
            amount: s.total,
            percentage: round_percentage(s.percentage),
        })
        .collect();

    ChartDataSets {
        daily_revenue,
        monthly_revenue,
        service_breakdown,
    }
}

/// Latest sales and expenses interleaved with low-stock alerts, newest first
fn recent_activities(
    sales: &[Sale],
    expenses: &[Expense],
    items: &[InventoryItem],
) -> Vec<RecentActivity> {
    let mut feed: Vec<RecentActivity> = Vec::new();

    feed.extend(sales.iter().map(|sale| RecentActivity {
        id: sale.id.clone().unwrap_or_default(),
        kind: ActivityKind::Sale,
        description: match &sale.notes {
            Some(notes) => format!("{} - {}", sale.service_type.name, notes),
            None => format!("{} x{}", sale.service_type.name, sale.quantity()),
        },
        amount: Some(format_rupees(sale.total())),
        date: sale.date_created,
        status: ActivityStatus::Completed,
    }));

    feed.extend(expenses.iter().map(|expense| RecentActivity {
        id: expense.id.clone().unwrap_or_default(),
        kind: ActivityKind::Expense,
        description: match &expense.notes {
            Some(notes) => format!("{} - {}", expense.category, notes),
            None => expense.category.to_string(),
        },
        amount: Some(format_rupees(expense.amount)),
        date: expense
            .created_at
            .unwrap_or_else(|| Calendar::start_of_day(expense.expense_date)),
        status: ActivityStatus::Completed,
    }));

    feed.extend(
        items
            .iter()
            .filter(|item| item.is_low_stock())
            .map(|item| RecentActivity {
                id: item.id.clone().unwrap_or_default(),
                kind: ActivityKind::Alert,
                description: format!("Low stock alert - {}", item.item_name),
                amount: None,
                date: item.last_updated,
                status: ActivityStatus::Warning,
            }),
    );

    // stable: equal timestamps keep sales, then expenses, then alerts
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(RECENT_ACTIVITY_LIMIT);
    feed
}
