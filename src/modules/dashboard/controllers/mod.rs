mod dashboard_controller;

pub use dashboard_controller::{configure, DashboardQuery};
