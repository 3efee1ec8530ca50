// Property-based tests for sale totals
//
// Properties tested:
// 1. A new sale's total equals quantity × rate
// 2. The invariant survives every setter and service switch
// 3. Rejected updates leave the sale unchanged
// 4. Totals past the per-record maximum are rejected, never overflowed

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use printdesk::core::money::MAX_RECORD_AMOUNT;
use printdesk::sales::models::catalog;
use printdesk::sales::{Sale, ServiceType};

fn service(idx: usize) -> ServiceType {
    catalog()[idx].clone()
}

fn created() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 10)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn assert_consistent(sale: &Sale) -> Result<(), TestCaseError> {
    prop_assert_eq!(sale.total(), Decimal::from(sale.quantity()) * sale.rate());
    Ok(())
}

proptest! {
    /// Property: total == quantity × rate on construction
    #[test]
    fn test_new_sale_total(quantity in 1u32..10_000, cents in 0i64..1_000_000, idx in 0usize..10) {
        let rate = Decimal::new(cents, 2);
        let sale = Sale::new(service(idx), quantity, rate, None, created()).unwrap();

        prop_assert_eq!(sale.total(), Decimal::from(quantity) * rate);
    }

    /// Property: total tracks every mutation
    #[test]
    fn test_total_tracks_updates(
        quantity in 1u32..1_000,
        new_quantity in 1u32..1_000,
        new_cents in 0i64..100_000,
        idx in 0usize..10,
    ) {
        let mut sale = Sale::new(service(0), quantity, Decimal::from(2), None, created()).unwrap();

        sale.set_quantity(new_quantity).unwrap();
        assert_consistent(&sale)?;

        sale.set_rate(Decimal::new(new_cents, 2)).unwrap();
        assert_consistent(&sale)?;

        sale.apply_service(service(idx)).unwrap();
        prop_assert_eq!(sale.rate(), service(idx).default_rate);
        assert_consistent(&sale)?;
    }

    /// Property: invalid updates are rejected without side effects
    #[test]
    fn test_rejected_updates_keep_state(quantity in 1u32..1_000, negative in 1i64..100_000) {
        let mut sale = Sale::new(service(2), quantity, Decimal::from(5), None, created()).unwrap();
        let before = sale.clone();

        prop_assert!(sale.set_quantity(0).is_err());
        prop_assert!(sale.set_rate(Decimal::new(-negative, 2)).is_err());
        prop_assert_eq!(sale, before);
    }

    /// Property: a rate that would carry the total past the maximum fails cleanly
    #[test]
    fn test_oversized_totals_are_rejected(quantity in 2u32..=u32::MAX, scale in 0u32..4) {
        let rate = Decimal::MAX / Decimal::from(10u32.pow(scale));
        prop_assert!(Sale::new(service(0), quantity, rate, None, created()).is_err());

        let mut sale = Sale::new(service(0), quantity, Decimal::ONE, None, created()).unwrap();
        let before = sale.clone();
        prop_assert!(sale.set_rate(MAX_RECORD_AMOUNT).is_err());
        prop_assert_eq!(sale, before);
    }
}

#[test]
fn test_invalid_sales_are_rejected() {
    assert!(Sale::new(service(0), 0, Decimal::from(2), None, created()).is_err());
    assert!(Sale::new(service(0), 1, Decimal::from(-1), None, created()).is_err());
    assert!(Sale::new(service(0), u32::MAX, Decimal::MAX, None, created()).is_err());
}
