mod dashboard_service;

pub use dashboard_service::{
    DashboardService, DAILY_REVENUE_DAYS, MONTHLY_REVENUE_MONTHS, RECENT_ACTIVITY_LIMIT,
};
