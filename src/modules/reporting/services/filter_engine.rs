use tracing::debug;

use crate::modules::reporting::models::{DateWindow, FilterSpec};
use crate::modules::reporting::record::ReportRecord;

/// Narrows a record collection by a [`FilterSpec`].
///
/// Predicates are conjunctive: date-from, date-to, category/service equality,
/// then case-insensitive substring search over the record's text fields.
pub struct FilterEngine;

/// A filter spec resolved once per call
struct Criteria<'a> {
    window: DateWindow,
    category: Option<&'a str>,
    term: Option<String>,
}

impl<'a> Criteria<'a> {
    fn resolve(spec: &'a FilterSpec) -> Self {
        if is_set(&spec.date_from) && spec.from_day().is_none() {
            debug!(date_from = ?spec.date_from, "Skipping unparseable date-from predicate");
        }
        if is_set(&spec.date_to) && spec.to_day().is_none() {
            debug!(date_to = ?spec.date_to, "Skipping unparseable date-to predicate");
        }

        Self {
            window: spec.window(),
            category: spec.category_key(),
            term: spec.search_term(),
        }
    }

    fn matches<T: ReportRecord>(&self, record: &T) -> bool {
        if !self.window.contains(record.occurred_at()) {
            return false;
        }

        if let Some(category) = self.category {
            if record.filter_key() != category {
                return false;
            }
        }

        if let Some(term) = &self.term {
            return record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str()));
        }

        true
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl FilterEngine {
    /// Return the records that satisfy every configured predicate, in their
    /// original relative order. The input is left untouched.
    pub fn apply<T: ReportRecord + Clone>(records: &[T], spec: &FilterSpec) -> Vec<T> {
        let criteria = Criteria::resolve(spec);
        records
            .iter()
            .filter(|record| criteria.matches(*record))
            .cloned()
            .collect()
    }
}
