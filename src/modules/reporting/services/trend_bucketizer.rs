use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::calendar::Calendar;
use crate::core::money::saturating_sum;
use crate::modules::reporting::models::{DateWindow, FilterSpec, TrendPoint, TrendSeries};
use crate::modules::reporting::record::ReportRecord;

/// Days shown when the filter leaves the start date open
pub const DEFAULT_TREND_DAYS: i64 = 30;

/// Longest span a summary trend covers, in daily buckets
pub const MAX_TREND_DAYS: i64 = 366;

/// Dense day-by-day (or month-by-month) series builder
pub struct TrendBucketizer;

impl TrendBucketizer {
    /// One bucket per calendar day in `[from, to]`, zero-filled.
    ///
    /// Records outside the inclusive window are ignored. `to < from` yields an
    /// empty series.
    pub fn bucketize<T: ReportRecord>(
        records: &[T],
        from: NaiveDate,
        to: NaiveDate,
    ) -> TrendSeries {
        if to < from {
            return TrendSeries::default();
        }

        let mut buckets: BTreeMap<NaiveDate, (Decimal, u64)> = BTreeMap::new();
        for day in from.iter_days().take_while(|day| *day <= to) {
            buckets.insert(day, (Decimal::ZERO, 0));
        }

        let window = DateWindow::for_days(from, to);
        for record in records {
            let at = record.occurred_at();
            if !window.contains(at) {
                continue;
            }
            if let Some(bucket) = buckets.get_mut(&at.date()) {
                bucket.0 = bucket.0.saturating_add(record.amount());
                bucket.1 += 1;
            }
        }

        TrendSeries::new(
            buckets
                .into_iter()
                .map(|(date, (value, count))| TrendPoint {
                    date,
                    label: Calendar::short_label(date),
                    value,
                    count,
                })
                .collect(),
        )
    }

    /// Day range a summary trend covers for a filter state: the filter's own
    /// bounds, or the last 30 days ending `today` for whichever side is open.
    ///
    /// Wider windows keep their last [`MAX_TREND_DAYS`] days.
    pub fn window_for(spec: &FilterSpec, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let to = spec.to_day().unwrap_or(today);
        let from = spec
            .from_day()
            .unwrap_or_else(|| today - Duration::days(DEFAULT_TREND_DAYS));

        if Calendar::days_between(from, to) >= MAX_TREND_DAYS {
            let clamped = to - Duration::days(MAX_TREND_DAYS - 1);
            debug!(%from, %to, %clamped, "Trend window clamped");
            return (clamped, to);
        }
        (from, to)
    }

    /// The trailing `days` days ending `today`, inclusive
    pub fn last_days<T: ReportRecord>(records: &[T], days: u32, today: NaiveDate) -> TrendSeries {
        if days == 0 {
            return TrendSeries::default();
        }
        let from = today - Duration::days(days as i64 - 1);
        Self::bucketize(records, from, today)
    }

    /// One bucket per month for the trailing `months` months including the
    /// current one, zero-filled, labelled like "Dec"
    pub fn bucketize_monthly<T: ReportRecord>(
        records: &[T],
        months: u32,
        today: NaiveDate,
    ) -> TrendSeries {
        if months == 0 {
            return TrendSeries::default();
        }

        let first = Calendar::months_back(today, months - 1);
        let mut buckets: BTreeMap<NaiveDate, (Decimal, u64)> = BTreeMap::new();
        for offset in 0..months {
            buckets.insert(Calendar::months_back(today, offset), (Decimal::ZERO, 0));
        }

        let window = DateWindow::for_days(first, today);
        for record in records {
            let at = record.occurred_at();
            if !window.contains(at) {
                continue;
            }
            let month = Calendar::start_of_month(at.date());
            if let Some(bucket) = buckets.get_mut(&month) {
                bucket.0 = bucket.0.saturating_add(record.amount());
                bucket.1 += 1;
            }
        }

        TrendSeries::new(
            buckets
                .into_iter()
                .map(|(date, (value, count))| TrendPoint {
                    date,
                    label: Calendar::month_label(date),
                    value,
                    count,
                })
                .collect(),
        )
    }
}

/// Sum of amounts for records that fall on `day`
pub fn day_total<T: ReportRecord>(records: &[T], day: NaiveDate) -> Decimal {
    saturating_sum(
        records
            .iter()
            .filter(|r| r.occurred_at().date() == day)
            .map(|r| r.amount()),
    )
}

/// Sum of amounts for records in the month containing `day`, up to and including `day`
pub fn month_to_date_total<T: ReportRecord>(records: &[T], day: NaiveDate) -> Decimal {
    let window = DateWindow::for_days(Calendar::start_of_month(day), day);
    saturating_sum(
        records
            .iter()
            .filter(|r| window.contains(r.occurred_at()))
            .map(|r| r.amount()),
    )
}

/// Sum of amounts for the whole calendar month before the one containing `day`
pub fn previous_month_total<T: ReportRecord>(records: &[T], day: NaiveDate) -> Decimal {
    let start = Calendar::months_back(day, 1);
    let end = Calendar::start_of_month(day) - Duration::days(1);
    let window = DateWindow::for_days(start, end);
    saturating_sum(
        records
            .iter()
            .filter(|r| window.contains(r.occurred_at()))
            .map(|r| r.amount()),
    )
}
