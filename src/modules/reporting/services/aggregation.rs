use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::money::saturating_sum;
use crate::modules::reporting::models::{CategorySummary, KpiSummary};
use crate::modules::reporting::record::ReportRecord;

/// KPI and per-group rollups over an already filtered collection
pub struct AggregationEngine;

impl AggregationEngine {
    /// Summarize records through their [`ReportRecord`] accessors
    pub fn summarize<T: ReportRecord>(records: &[T]) -> (KpiSummary, Vec<CategorySummary>) {
        Self::summarize_by(
            records,
            |r| r.amount(),
            |r| r.group_key().to_string(),
            |r| r.units(),
        )
    }

    /// Summarize with explicit amount, group-key and unit extractors.
    ///
    /// Groups appear once per distinct key, ordered by total descending; equal
    /// totals keep the order in which their keys were first seen. Sums saturate
    /// at the `Decimal` bounds rather than overflow.
    pub fn summarize_by<T, A, K, U>(
        records: &[T],
        amount: A,
        key: K,
        units: U,
    ) -> (KpiSummary, Vec<CategorySummary>)
    where
        A: Fn(&T) -> Decimal,
        K: Fn(&T) -> String,
        U: Fn(&T) -> Decimal,
    {
        let kpis = Self::kpis_by(records, &amount);

        let mut groups: Vec<CategorySummary> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let group_key = key(record);
            let slot = match index.get(&group_key) {
                Some(&slot) => slot,
                None => {
                    groups.push(CategorySummary::open(group_key.clone()));
                    index.insert(group_key, groups.len() - 1);
                    groups.len() - 1
                }
            };

            let group = &mut groups[slot];
            group.count += 1;
            group.units = group.units.saturating_add(units(record));
            group.total = group.total.saturating_add(amount(record));
        }

        for group in &mut groups {
            group.average = ratio(group.total, Decimal::from(group.count));
            group.average_rate = ratio(group.total, group.units);
            group.percentage = match group.total.checked_mul(Decimal::ONE_HUNDRED) {
                Some(scaled) => ratio(scaled, kpis.total),
                None => ratio(group.total, kpis.total).saturating_mul(Decimal::ONE_HUNDRED),
            };
        }

        // Vec::sort_by is stable, which keeps first-seen order among ties
        groups.sort_by(|a, b| b.total.cmp(&a.total));

        (kpis, groups)
    }

    /// Count, total, average and max of the amount field
    pub fn kpis<T: ReportRecord>(records: &[T]) -> KpiSummary {
        Self::kpis_by(records, |r: &T| r.amount())
    }

    pub fn kpis_by<T, A>(records: &[T], amount: A) -> KpiSummary
    where
        A: Fn(&T) -> Decimal,
    {
        let count = records.len();
        let total = saturating_sum(records.iter().map(&amount));
        let max = records
            .iter()
            .map(&amount)
            .max()
            .unwrap_or(Decimal::ZERO);

        KpiSummary {
            count,
            total,
            average: ratio(total, Decimal::from(count)),
            max,
        }
    }
}

/// numerator / denominator, 0 when the denominator is 0 and saturated on overflow
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}
