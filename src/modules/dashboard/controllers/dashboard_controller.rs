use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::Calendar;
use crate::modules::dashboard::services::DashboardService;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Day treated as today; defaults to the shop's current date
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// GET /dashboard
pub async fn get_dashboard(
    service: web::Data<Arc<DashboardService>>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let today = Calendar::reporting_day(query.as_of.unwrap_or_else(Calendar::today))?;
    let data = service.dashboard(today).await?;

    Ok(HttpResponse::Ok().json(data))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard));
}
