mod dashboard;

pub use dashboard::{
    ActivityKind, ActivityStatus, ChartDataSets, DailyRevenue, DashboardData, KpiCard,
    MonthlyRevenue, RecentActivity, ServiceBreakdown, Trend,
};
