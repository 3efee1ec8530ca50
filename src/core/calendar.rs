use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::{AppError, Result};

/// Calendar-day helpers for shop-local wall-clock timestamps.
/// Filter windows and trend buckets are keyed by calendar day, never by instant.
pub struct Calendar;

impl Calendar {
    /// Today's date on the shop's clock
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Current wall-clock time on the shop's clock
    pub fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Wall-clock timestamp from its parts
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Invalid timestamp {}-{:02}-{:02} {:02}:{:02}",
                    year, month, day, hour, minute
                ))
            })
    }

    /// 00:00:00.000 of the given day
    pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
        day.and_time(NaiveTime::MIN)
    }

    /// 23:59:59.999 of the given day
    pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
        day.and_hms_milli_opt(23, 59, 59, 999)
            .unwrap_or_else(|| Self::start_of_day(day))
    }

    /// Short chart label, e.g. "Dec 1"
    pub fn short_label(day: NaiveDate) -> String {
        day.format("%b %-d").to_string()
    }

    /// Month label, e.g. "Dec"
    pub fn month_label(day: NaiveDate) -> String {
        day.format("%b").to_string()
    }

    /// Whole days from `from` to `to`; negative when `to` precedes `from`
    pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
        (to - from).num_days()
    }

    /// Monday of the week containing `day`
    pub fn start_of_week(day: NaiveDate) -> NaiveDate {
        day - Duration::days(day.weekday().num_days_from_monday() as i64)
    }

    /// First day of the month containing `day`
    pub fn start_of_month(day: NaiveDate) -> NaiveDate {
        day.with_day(1).unwrap_or(day)
    }

    /// Accept `day` as a report's "today" only within years 1 to 9999, so
    /// the trailing windows computed around it stay on the calendar
    pub fn reporting_day(day: NaiveDate) -> Result<NaiveDate> {
        if !(1..=9999).contains(&day.year()) {
            return Err(AppError::validation(format!(
                "Reporting day {} is outside years 1 to 9999",
                day
            )));
        }
        Ok(day)
    }

    /// First day of the month `months` months before the month containing `day`
    pub fn months_back(day: NaiveDate, months: u32) -> NaiveDate {
        let index = day.year() * 12 + day.month0() as i32 - months as i32;
        let year = index.div_euclid(12);
        let month0 = index.rem_euclid(12) as u32;
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(day)
    }
}

/// Parse a form date value into a calendar day.
///
/// Accepts `YYYY-MM-DD` or an ISO datetime (the calendar day is kept).
/// Blank or malformed input yields `None`.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(day);
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Format a day as ISO `YYYY-MM-DD`
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
