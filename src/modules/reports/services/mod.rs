mod report_service;

pub use report_service::{ReportService, DEFAULT_OVERVIEW_DAYS, MAX_OVERVIEW_DAYS};
