use chrono::NaiveDate;
use tracing::debug;

use super::{AggregationEngine, FilterEngine, TrendBucketizer};
use crate::modules::reporting::models::{FilterSpec, SummaryReport};
use crate::modules::reporting::record::ReportRecord;

/// Filter, aggregate and bucketize one collection for a summary view.
///
/// Recomputed from scratch on every call; the trend shares the filtered input.
pub fn build_summary<T: ReportRecord + Clone>(
    records: &[T],
    spec: &FilterSpec,
    today: NaiveDate,
) -> SummaryReport {
    let filtered = FilterEngine::apply(records, spec);
    let (kpis, breakdown) = AggregationEngine::summarize(&filtered);
    let (trend_from, trend_to) = TrendBucketizer::window_for(spec, today);
    let trend = TrendBucketizer::bucketize(&filtered, trend_from, trend_to);

    debug!(
        input = records.len(),
        unfiltered = spec.is_empty(),
        matched = filtered.len(),
        groups = breakdown.len(),
        buckets = trend.len(),
        "Summary computed"
    );

    SummaryReport {
        kpis,
        breakdown,
        trend,
        trend_from,
        trend_to,
    }
}
