mod expense_controller;

pub use expense_controller::configure;
