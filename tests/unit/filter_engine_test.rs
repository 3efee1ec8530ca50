// Property-based tests for the filter engine
//
// Properties tested:
// 1. Filtering is idempotent
// 2. The result is an order-preserving subsequence of the input
// 3. A single-day range keeps exactly the records on that calendar day
// 4. An empty filter passes everything through

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::Duration;
use proptest::prelude::*;
use rust_decimal::Decimal;

use helpers::{base_day, day, entries_strategy, Entry, CATEGORIES};
use printdesk::reporting::{FilterEngine, FilterSpec, QuickRange};

fn is_subsequence(sub: &[Entry], of: &[Entry]) -> bool {
    let mut rest = of.iter();
    sub.iter().all(|wanted| rest.any(|candidate| candidate == wanted))
}

proptest! {
    /// Property: apply(apply(r, s), s) == apply(r, s)
    #[test]
    fn test_filter_is_idempotent(
        records in entries_strategy(60),
        from in 0i64..30,
        span in 0i64..10,
        category in prop::option::of(0usize..CATEGORIES.len()),
        search in prop::option::of(prop::sample::select(vec!["paper", "REPAIR", "tea", "zzz"])),
    ) {
        let start = base_day() + Duration::days(from);
        let end = start + Duration::days(span);
        let mut spec = FilterSpec::new().with_dates(Some(start), Some(end));
        if let Some(idx) = category {
            spec = spec.with_category(CATEGORIES[idx]);
        }
        if let Some(term) = search {
            spec = spec.with_search(term);
        }

        let once = FilterEngine::apply(&records, &spec);
        let twice = FilterEngine::apply(&once, &spec);

        prop_assert_eq!(&once, &twice);
        prop_assert!(is_subsequence(&once, &records));
    }

    /// Property: dateFrom == dateTo == D keeps exactly the records on day D
    #[test]
    fn test_single_day_range(records in entries_strategy(60), offset in 0i64..30) {
        let target = base_day() + Duration::days(offset);
        let spec = FilterSpec::new().with_dates(Some(target), Some(target));

        let result = FilterEngine::apply(&records, &spec);
        let expected: Vec<Entry> = records
            .iter()
            .filter(|e| e.at.date() == target)
            .cloned()
            .collect();

        prop_assert_eq!(result, expected);
    }

    /// Property: the empty filter is the identity
    #[test]
    fn test_empty_filter_passes_through(records in entries_strategy(40)) {
        prop_assert_eq!(FilterEngine::apply(&records, &FilterSpec::default()), records);
    }
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let records = vec![
        Entry {
            at: day(2).and_hms_opt(9, 0, 0).unwrap(),
            category: "Printing Materials",
            amount: Decimal::from(5000),
            note: "A4 Paper Bundles (10)",
        },
        Entry {
            at: day(1).and_hms_opt(9, 0, 0).unwrap(),
            category: "Maintenance",
            amount: Decimal::from(800),
            note: "Printer Repair",
        },
    ];

    let result = FilterEngine::apply(&records, &FilterSpec::new().with_search("paper"));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].note, "A4 Paper Bundles (10)");
}

#[test]
fn test_quick_ranges() {
    // 2025-12-10 is a Wednesday
    let today = day(10);

    assert_eq!(QuickRange::Today.resolve(today), (today, today));
    assert_eq!(QuickRange::Week.resolve(today), (day(8), today));
    assert_eq!(QuickRange::Month.resolve(today), (day(1), today));
}

#[test]
fn test_bounds_cover_whole_days() {
    let records = vec![
        Entry {
            at: day(10).and_hms_milli_opt(23, 59, 59, 999).unwrap(),
            category: "Rent",
            amount: Decimal::ONE,
            note: "",
        },
        Entry {
            at: day(11).and_hms_opt(0, 0, 0).unwrap(),
            category: "Rent",
            amount: Decimal::ONE,
            note: "",
        },
    ];

    // A datetime bound keeps only its calendar day
    let spec = FilterSpec {
        date_from: Some("2025-12-10T15:00:00".to_string()),
        date_to: Some("2025-12-10".to_string()),
        ..FilterSpec::default()
    };

    assert_eq!(FilterEngine::apply(&records, &spec).len(), 1);
}
