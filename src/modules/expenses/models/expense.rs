use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::MAX_RECORD_AMOUNT;
use crate::core::traits::Entity;
use crate::core::{AppError, Calendar, Result};
use crate::modules::reporting::ReportRecord;

/// Smallest amount an expense can be recorded with
pub const MIN_EXPENSE_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest amount an expense can be recorded with
pub const MAX_EXPENSE_AMOUNT: Decimal = MAX_RECORD_AMOUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rent,
    Electricity,
    Internet,
    #[serde(rename = "Printing Materials")]
    PrintingMaterials,
    Maintenance,
    #[serde(rename = "Staff Salary")]
    StaffSalary,
    Miscellaneous,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Electricity,
        ExpenseCategory::Internet,
        ExpenseCategory::PrintingMaterials,
        ExpenseCategory::Maintenance,
        ExpenseCategory::StaffSalary,
        ExpenseCategory::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Electricity => "Electricity",
            ExpenseCategory::Internet => "Internet",
            ExpenseCategory::PrintingMaterials => "Printing Materials",
            ExpenseCategory::Maintenance => "Maintenance",
            ExpenseCategory::StaffSalary => "Staff Salary",
            ExpenseCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Card,
}

/// An outgoing payment by the shop
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Option<String>,
    pub expense_date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub attachment_url: Option<String>,
    /// Set by the store when the expense is first recorded
    pub created_at: Option<NaiveDateTime>,
}

impl Expense {
    pub fn new(
        expense_date: NaiveDate,
        category: ExpenseCategory,
        amount: Decimal,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Result<Self> {
        if amount < MIN_EXPENSE_AMOUNT {
            return Err(AppError::validation(format!(
                "Expense amount must be at least {}, got: {}",
                MIN_EXPENSE_AMOUNT, amount
            )));
        }
        if amount > MAX_EXPENSE_AMOUNT {
            return Err(AppError::validation(format!(
                "Expense amount must be at most {}, got: {}",
                MAX_EXPENSE_AMOUNT, amount
            )));
        }

        Ok(Self {
            id: None,
            expense_date,
            category,
            amount,
            payment_method,
            notes: notes.filter(|n| !n.trim().is_empty()),
            attachment_url: None,
            created_at: None,
        })
    }

    pub fn with_attachment(mut self, url: Option<String>) -> Self {
        self.attachment_url = url.filter(|u| !u.trim().is_empty());
        self
    }
}

impl Entity for Expense {
    const KIND: &'static str = "Expense";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn touch(&mut self, now: NaiveDateTime) {
        self.created_at.get_or_insert(now);
    }
}

impl ReportRecord for Expense {
    fn occurred_at(&self) -> NaiveDateTime {
        Calendar::start_of_day(self.expense_date)
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn group_key(&self) -> &str {
        self.category.label()
    }

    fn filter_key(&self) -> &str {
        self.category.label()
    }

    fn search_fields(&self) -> Vec<&str> {
        self.notes.as_deref().into_iter().collect()
    }
}

/// Request to record an expense
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub expense_date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub attachment_url: Option<String>,
}

impl TryFrom<CreateExpenseRequest> for Expense {
    type Error = AppError;

    fn try_from(request: CreateExpenseRequest) -> Result<Self> {
        Ok(Expense::new(
            request.expense_date,
            request.category,
            request.amount,
            request.payment_method,
            request.notes,
        )?
        .with_attachment(request.attachment_url))
    }
}
