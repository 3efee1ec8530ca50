mod filter_spec;
mod query;
mod report;
mod summary;
mod trend;

pub use filter_spec::{DateWindow, FilterSpec, QuickRange};
pub use query::ListQuery;
pub use report::{
    CategorySummaryResponse, KpiResponse, SummaryReport, SummaryResponse, TrendResponse,
};
pub use summary::{CategorySummary, KpiSummary};
pub use trend::{TrendPoint, TrendSeries};
