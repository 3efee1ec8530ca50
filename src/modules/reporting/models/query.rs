use chrono::NaiveDate;
use serde::Deserialize;

use super::{FilterSpec, QuickRange};

/// Query string of the list and summary endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, alias = "serviceType")]
    pub category: Option<String>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    /// Quick preset; overrides dateFrom/dateTo when present
    #[serde(default)]
    pub range: Option<QuickRange>,
}

impl ListQuery {
    pub fn into_filter(self, today: NaiveDate) -> FilterSpec {
        let spec = FilterSpec {
            search: self.search,
            category: self.category,
            date_from: self.date_from,
            date_to: self.date_to,
        };

        match self.range {
            Some(range) => spec.with_quick_range(range, today),
            None => spec,
        }
    }
}
