pub mod dashboard;
pub mod expenses;
pub mod health;
pub mod inventory;
pub mod reporting;
pub mod reports;
pub mod sales;
