// Dashboard module: header KPIs, revenue charts and the activity feed

pub mod controllers;
pub mod models;
pub mod services;

pub use models::DashboardData;
pub use services::DashboardService;
