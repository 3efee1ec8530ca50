use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::Calendar;
use crate::modules::expenses::models::CreateExpenseRequest;
use crate::modules::expenses::services::ExpenseService;
use crate::modules::reporting::{ListQuery, SummaryResponse};

/// Record an expense
/// POST /expenses
pub async fn create_expense(
    service: web::Data<Arc<ExpenseService>>,
    request: web::Json<CreateExpenseRequest>,
) -> Result<HttpResponse, AppError> {
    let expense = service.create_expense(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(expense))
}

/// Filtered expense list
/// GET /expenses?search=&category=&dateFrom=&dateTo=&range=
pub async fn list_expenses(
    service: web::Data<Arc<ExpenseService>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let spec = query.into_inner().into_filter(Calendar::today());
    let expenses = service.list_expenses(&spec).await?;

    Ok(HttpResponse::Ok().json(expenses))
}

/// KPIs, per-category breakdown and spend trend
/// GET /expenses/summary
pub async fn expense_summary(
    service: web::Data<Arc<ExpenseService>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let today = Calendar::today();
    let spec = query.into_inner().into_filter(today);
    let report = service.summary(&spec, today).await?;

    Ok(HttpResponse::Ok().json(SummaryResponse::from(report)))
}

/// DELETE /expenses/{id}
pub async fn delete_expense(
    service: web::Data<Arc<ExpenseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.request_deletion(&id).await?;

    Ok(HttpResponse::Accepted().json(serde_json::json!({ "id": id, "deleted": false })))
}

/// Configure expense routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/expenses")
            .route("", web::get().to(list_expenses))
            .route("", web::post().to(create_expense))
            .route("/summary", web::get().to(expense_summary))
            .route("/{id}", web::delete().to(delete_expense)),
    );
}
