use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::calendar::{format_day, parse_day, Calendar};

/// User-editable filter form state.
///
/// Every field is optional; an absent or blank field applies no predicate.
/// Dates stay as the raw form strings so a malformed value can be skipped
/// instead of failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring matched against note/name fields
    #[serde(default)]
    pub search: Option<String>,

    /// Category name, or service id for sales
    #[serde(default, alias = "serviceType")]
    pub category: Option<String>,

    /// Inclusive lower bound, normalized to 00:00:00.000
    #[serde(default)]
    pub date_from: Option<String>,

    /// Inclusive upper bound, normalized to 23:59:59.999
    #[serde(default)]
    pub date_to: Option<String>,
}

/// Quick date presets offered next to the date pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickRange {
    Today,
    /// Monday of the current week through today
    Week,
    /// First of the current month through today
    Month,
}

impl QuickRange {
    pub fn resolve(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let from = match self {
            QuickRange::Today => today,
            QuickRange::Week => Calendar::start_of_week(today),
            QuickRange::Month => Calendar::start_of_month(today),
        };
        (from, today)
    }
}

impl std::str::FromStr for QuickRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(QuickRange::Today),
            "week" => Ok(QuickRange::Week),
            "month" => Ok(QuickRange::Month),
            _ => Err(format!("Invalid quick range: {}", s)),
        }
    }
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_dates(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from.map(format_day);
        self.date_to = to.map(format_day);
        self
    }

    /// Overwrite both date bounds with a quick preset ending `today`
    pub fn with_quick_range(self, range: QuickRange, today: NaiveDate) -> Self {
        let (from, to) = range.resolve(today);
        self.with_dates(Some(from), Some(to))
    }

    /// Lower-cased search term, if one is set
    pub fn search_term(&self) -> Option<String> {
        non_blank(&self.search).map(str::to_lowercase)
    }

    /// Category/service key, if one is set
    pub fn category_key(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    /// Parsed lower bound day; `None` when absent or malformed
    pub fn from_day(&self) -> Option<NaiveDate> {
        non_blank(&self.date_from).and_then(parse_day)
    }

    /// Parsed upper bound day; `None` when absent or malformed
    pub fn to_day(&self) -> Option<NaiveDate> {
        non_blank(&self.date_to).and_then(parse_day)
    }

    /// Inclusive timestamp window for the date predicates
    pub fn window(&self) -> DateWindow {
        DateWindow {
            from: self.from_day().map(Calendar::start_of_day),
            to: self.to_day().map(Calendar::end_of_day),
        }
    }

    /// True when no predicate would apply
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.category_key().is_none()
            && self.from_day().is_none()
            && self.to_day().is_none()
    }
}

/// Inclusive `[from, to]` timestamp window; an open side does not constrain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateWindow {
    pub fn for_days(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(Calendar::start_of_day(from)),
            to: Some(Calendar::end_of_day(to)),
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.from.map_or(true, |from| at >= from) && self.to.map_or(true, |to| at <= to)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
