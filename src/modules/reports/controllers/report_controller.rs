use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::calendar::parse_day;
use crate::core::{AppError, Calendar, Result};
use crate::modules::reports::models::OverviewResponse;
use crate::modules::reports::services::ReportService;

/// Query parameters for the overview endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewQuery {
    /// Start of the period (inclusive, YYYY-MM-DD); defaults to six days before `asOf`
    #[serde(default)]
    pub date_from: Option<String>,
    /// End of the period (inclusive, YYYY-MM-DD); defaults to `asOf`
    #[serde(default)]
    pub date_to: Option<String>,
    /// Day treated as today; defaults to the shop's current date
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// GET /reports/overview
///
/// Revenue vs expenses per day, service distribution and period totals.
pub async fn get_overview(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<OverviewQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let today = Calendar::reporting_day(query.as_of.unwrap_or_else(Calendar::today))?;
    let (default_from, default_to) = ReportService::default_range(today);

    let start_date = parse_bound("dateFrom", query.date_from.as_deref())?.unwrap_or(default_from);
    let end_date = parse_bound("dateTo", query.date_to.as_deref())?.unwrap_or(default_to);

    let report = service
        .generate_overview(start_date, end_date, today)
        .await?;

    Ok(HttpResponse::Ok().json(OverviewResponse::from(report)))
}

/// Blank means "use the default"; anything else must be a valid day
fn parse_bound(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_day(raw).map(Some).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid {} format: '{}'. Expected YYYY-MM-DD",
                name, raw
            ))
        }),
    }
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("/overview", web::get().to(get_overview)));
}
