mod expense_repository;

pub use expense_repository::{seed_expenses, ExpenseRepository};
