use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::traits::Repository;
use crate::core::{AppError, Latency, MemoryStore, Result};
use crate::modules::expenses::models::{Expense, ExpenseCategory, PaymentMethod};

/// Expense store, optionally pre-filled with the demo ledger
pub struct ExpenseRepository;

impl ExpenseRepository {
    pub fn in_memory(latency: Latency, seed: bool) -> Result<Arc<dyn Repository<Expense>>> {
        let records = if seed { seed_expenses()? } else { Vec::new() };
        Ok(Arc::new(MemoryStore::with_records(records, latency)))
    }
}

/// Demo expenses for December 2025, newest first
pub fn seed_expenses() -> Result<Vec<Expense>> {
    let rows = [
        (
            "1",
            10,
            ExpenseCategory::Rent,
            15000,
            PaymentMethod::BankTransfer,
            "Office Rent for December",
        ),
        (
            "2",
            8,
            ExpenseCategory::Electricity,
            2500,
            PaymentMethod::Upi,
            "Electricity Bill Nov 2025",
        ),
        (
            "3",
            5,
            ExpenseCategory::Internet,
            1200,
            PaymentMethod::Card,
            "Broadband Subscription",
        ),
        (
            "4",
            2,
            ExpenseCategory::PrintingMaterials,
            5000,
            PaymentMethod::Cash,
            "A4 Paper Bundles (10)",
        ),
        ("5", 1, ExpenseCategory::Maintenance, 800, PaymentMethod::Cash, "Printer Repair"),
    ];

    rows.into_iter()
        .map(|(id, day, category, amount, method, notes)| -> Result<Expense> {
            let date = NaiveDate::from_ymd_opt(2025, 12, day)
                .ok_or_else(|| AppError::internal(format!("Invalid seed day {}", day)))?;
            let mut expense = Expense::new(
                date,
                category,
                Decimal::from(amount),
                method,
                Some(notes.to_string()),
            )?;
            expense.id = Some(id.to_string());
            Ok(expense)
        })
        .collect()
}
