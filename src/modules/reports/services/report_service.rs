use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::{info, warn};

use crate::core::{AppError, Calendar, Result};
use crate::modules::expenses::ExpenseService;
use crate::modules::reporting::{AggregationEngine, FilterEngine, FilterSpec, TrendBucketizer};
use crate::modules::reports::models::{
    OverviewReport, OverviewTotals, RevenueExpensePoint, ServiceDistribution,
};
use crate::modules::sales::SaleService;

/// Days covered by the overview when no range is given
pub const DEFAULT_OVERVIEW_DAYS: i64 = 7;

/// Longest range the overview accepts
pub const MAX_OVERVIEW_DAYS: i64 = 365;

/// Service for the reports page: revenue vs expenses, service mix, totals
pub struct ReportService {
    sales: Arc<SaleService>,
    expenses: Arc<ExpenseService>,
}

impl ReportService {
    pub fn new(sales: Arc<SaleService>, expenses: Arc<ExpenseService>) -> Self {
        Self { sales, expenses }
    }

    /// Generate the overview for `[start_date, end_date]`
    ///
    /// # Errors
    /// Returns a validation error if the range is reversed, ends after
    /// `today`, or spans more than a year
    pub async fn generate_overview(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<OverviewReport> {
        Self::validate_date_range(start_date, end_date, today)?;

        info!(
            "Generating overview report: start={}, end={}",
            start_date, end_date
        );

        let spec = FilterSpec::new().with_dates(Some(start_date), Some(end_date));
        let sales = FilterEngine::apply(&self.sales.all_sales().await?, &spec);
        let expenses = FilterEngine::apply(&self.expenses.all_expenses().await?, &spec);

        let revenue = TrendBucketizer::bucketize(&sales, start_date, end_date);
        let spend = TrendBucketizer::bucketize(&expenses, start_date, end_date);
        let revenue_expense = revenue
            .points()
            .iter()
            .zip(spend.points())
            .map(|(r, e)| RevenueExpensePoint {
                date: r.date,
                label: r.label.clone(),
                revenue: r.value,
                expense: e.value,
            })
            .collect();

        let (sale_kpis, services) = AggregationEngine::summarize(&sales);
        let expense_kpis = AggregationEngine::kpis(&expenses);

        let service_distribution = services
            .into_iter()
            .map(|s| ServiceDistribution {
                service: s.key,
                amount: s.total,
                percentage: s.percentage,
            })
            .collect();

        let report = OverviewReport {
            start_date,
            end_date,
            revenue_expense,
            service_distribution,
            totals: OverviewTotals::new(sale_kpis.total, expense_kpis.total, sale_kpis.count),
        };

        if report.is_empty() {
            warn!(
                "Empty overview report generated for period {} to {}",
                start_date, end_date
            );
        } else {
            info!(
                "Overview report generated: revenue={}, expenses={}, {} services",
                report.totals.total_revenue,
                report.totals.total_expenses,
                report.service_distribution.len()
            );
        }

        Ok(report)
    }

    /// The default overview window: the last seven days ending `today`
    pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today - Duration::days(DEFAULT_OVERVIEW_DAYS - 1), today)
    }

    /// Validate that a date range is reasonable
    pub fn validate_date_range(
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<()> {
        if start_date > end_date {
            return Err(AppError::validation(format!(
                "dateFrom ({}) must be before or equal to dateTo ({})",
                start_date, end_date
            )));
        }

        if end_date > today {
            return Err(AppError::validation(format!(
                "dateTo cannot be in the future (today is {})",
                today
            )));
        }

        let days_diff = Calendar::days_between(start_date, end_date);
        if days_diff > MAX_OVERVIEW_DAYS {
            return Err(AppError::validation(format!(
                "Date range too large: {} days (maximum {} days)",
                days_diff, MAX_OVERVIEW_DAYS
            )));
        }

        Ok(())
    }
}
