// Reporting core: filter engine, aggregation engine and trend bucketizer,
// written once against the ReportRecord accessors and shared by every
// domain module.

pub mod models;
pub mod record;
pub mod services;

pub use models::{
    CategorySummary, FilterSpec, KpiSummary, ListQuery, QuickRange, SummaryReport, SummaryResponse,
    TrendSeries,
};
pub use record::ReportRecord;
pub use services::{build_summary, AggregationEngine, FilterEngine, TrendBucketizer};
