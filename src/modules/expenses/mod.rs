// Expenses module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Expense, ExpenseCategory, PaymentMethod};
pub use repositories::ExpenseRepository;
pub use services::ExpenseService;
