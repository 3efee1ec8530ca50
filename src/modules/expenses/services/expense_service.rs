use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::expenses::models::{CreateExpenseRequest, Expense};
use crate::modules::reporting::{build_summary, FilterEngine, FilterSpec, SummaryReport};

/// Expense ledger operations and the expense summary view
pub struct ExpenseService {
    repo: Arc<dyn Repository<Expense>>,
}

impl ExpenseService {
    pub fn new(repo: Arc<dyn Repository<Expense>>) -> Self {
        Self { repo }
    }

    pub async fn create_expense(&self, request: CreateExpenseRequest) -> Result<Expense> {
        let expense = self.repo.create(Expense::try_from(request)?).await?;

        info!(
            "Expense recorded: id={:?}, category={}, amount={}",
            expense.id, expense.category, expense.amount
        );

        Ok(expense)
    }

    /// Expenses matching the filter, newest first
    pub async fn list_expenses(&self, spec: &FilterSpec) -> Result<Vec<Expense>> {
        let expenses = self.repo.list().await?;
        Ok(FilterEngine::apply(&expenses, spec))
    }

    pub async fn all_expenses(&self) -> Result<Vec<Expense>> {
        self.repo.list().await
    }

    /// KPIs, per-category breakdown and daily spend trend for a filter state
    pub async fn summary(&self, spec: &FilterSpec, today: NaiveDate) -> Result<SummaryReport> {
        let expenses = self.repo.list().await?;
        let report = build_summary(&expenses, spec, today);

        if report.kpis.count == 0 {
            warn!("Expense summary matched no records: filter={:?}", spec);
        } else {
            info!(
                "Expense summary generated: {} expenses, total={}, {} categories",
                report.kpis.count,
                report.kpis.total,
                report.breakdown.len()
            );
        }

        Ok(report)
    }

    /// Acknowledge a delete request for an existing expense without applying it
    pub async fn request_deletion(&self, id: &str) -> Result<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Expense {}", id)))?;

        warn!("Expense deletion requested but not supported by the store: id={}", id);
        Ok(())
    }
}
