use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Accessors the reporting engines need from a domain record.
///
/// Sales, expenses and inventory items each implement this once; the filter,
/// aggregation and trend code is written against the trait only.
pub trait ReportRecord {
    /// When the record happened; drives date filtering and trend buckets
    fn occurred_at(&self) -> NaiveDateTime;

    /// The amount-like field summed into totals
    fn amount(&self) -> Decimal;

    /// Units behind the amount (a sale's quantity); one per record otherwise
    fn units(&self) -> Decimal {
        Decimal::ONE
    }

    /// Breakdown key: category, or service name for sales
    fn group_key(&self) -> &str;

    /// Value the category/service filter is compared against
    fn filter_key(&self) -> &str;

    /// Text fields free-text search looks into; a match in any one is enough
    fn search_fields(&self) -> Vec<&str>;
}
