mod overview_report;

pub use overview_report::{
    OverviewReport, OverviewResponse, OverviewTotals, RevenueExpensePoint, ServiceDistribution,
};
