// Property-based tests for the trend bucketizer
//
// Properties tested:
// 1. A window of N+1 days yields exactly N+1 chronological buckets
// 2. Bucket values add up to the amounts of the records inside the window
// 3. Bucket counts add up to the number of records inside the window
// 4. Monthly series always have one bucket per requested month

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::Duration;
use proptest::prelude::*;
use rust_decimal::Decimal;

use helpers::{base_day, day, entries_strategy, Entry};
use printdesk::reporting::TrendBucketizer;

proptest! {
    /// Property: len == days + 1, dates strictly increasing
    #[test]
    fn test_bucket_count(records in entries_strategy(40), start in 0i64..30, days in 0i64..60) {
        let from = base_day() + Duration::days(start);
        let to = from + Duration::days(days);

        let series = TrendBucketizer::bucketize(&records, from, to);

        prop_assert_eq!(series.len() as i64, days + 1);
        prop_assert_eq!(series.points()[0].date, from);
        prop_assert_eq!(series.points()[series.len() - 1].date, to);
        for pair in series.points().windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    /// Property: Σ bucket value == Σ amount of in-window records
    #[test]
    fn test_bucket_totals(records in entries_strategy(60), start in 0i64..30, days in 0i64..15) {
        let from = base_day() + Duration::days(start);
        let to = from + Duration::days(days);

        let series = TrendBucketizer::bucketize(&records, from, to);
        let inside: Vec<&Entry> = records
            .iter()
            .filter(|r| r.at.date() >= from && r.at.date() <= to)
            .collect();

        let expected: Decimal = inside.iter().map(|r| r.amount).sum();
        let counted: u64 = series.counts().iter().sum();

        prop_assert_eq!(series.total(), expected);
        prop_assert_eq!(counted as usize, inside.len());
    }

    /// Property: one bucket per month, oldest first
    #[test]
    fn test_monthly_bucket_count(records in entries_strategy(40), months in 1u32..24) {
        let series = TrendBucketizer::bucketize_monthly(&records, months, day(31));

        prop_assert_eq!(series.len(), months as usize);
        let labels = series.labels();
        prop_assert_eq!(labels.last().map(String::as_str), Some("Dec"));
    }
}

#[test]
fn test_empty_window_is_zero_filled() {
    let series = TrendBucketizer::bucketize::<Entry>(&[], day(1), day(3));

    assert_eq!(series.labels(), vec!["Dec 1", "Dec 2", "Dec 3"]);
    assert_eq!(series.values(), vec![Decimal::ZERO; 3]);
}

#[test]
fn test_last_fifteen_days() {
    let series = TrendBucketizer::last_days::<Entry>(&[], 15, day(15));

    assert_eq!(series.len(), 15);
    assert_eq!(series.labels().first().map(String::as_str), Some("Dec 1"));
    assert_eq!(series.labels().last().map(String::as_str), Some("Dec 15"));
}
