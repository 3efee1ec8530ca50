mod expense;

pub use expense::{
    CreateExpenseRequest, Expense, ExpenseCategory, PaymentMethod, MAX_EXPENSE_AMOUNT,
    MIN_EXPENSE_AMOUNT,
};
