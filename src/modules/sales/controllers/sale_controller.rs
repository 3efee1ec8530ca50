use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::Calendar;
use crate::modules::reporting::{ListQuery, SummaryResponse};
use crate::modules::sales::models::{CreateSaleRequest, SaleResponse};
use crate::modules::sales::services::SaleService;

/// Record a sale
/// POST /sales
pub async fn create_sale(
    service: web::Data<Arc<SaleService>>,
    request: web::Json<CreateSaleRequest>,
) -> Result<HttpResponse, AppError> {
    let sale = service.create_sale(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(SaleResponse::from(sale)))
}

/// Filtered sales list
/// GET /sales?search=&serviceType=&dateFrom=&dateTo=&range=
pub async fn list_sales(
    service: web::Data<Arc<SaleService>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let spec = query.into_inner().into_filter(Calendar::today());
    let sales = service.list_sales(&spec).await?;

    let body: Vec<SaleResponse> = sales.into_iter().map(SaleResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Service catalog for the sale form
/// GET /sales/service-types
pub async fn list_service_types(
    service: web::Data<Arc<SaleService>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.service_types().await))
}

/// KPIs, per-service breakdown and revenue trend
/// GET /sales/summary
pub async fn sales_summary(
    service: web::Data<Arc<SaleService>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let today = Calendar::today();
    let spec = query.into_inner().into_filter(today);
    let report = service.summary(&spec, today).await?;

    Ok(HttpResponse::Ok().json(SummaryResponse::from(report)))
}

/// Deletion request; acknowledged, not applied
/// DELETE /sales/{id}
pub async fn delete_sale(
    service: web::Data<Arc<SaleService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.request_deletion(&id).await?;

    Ok(HttpResponse::Accepted().json(serde_json::json!({ "id": id, "deleted": false })))
}

/// Configure sales routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("", web::get().to(list_sales))
            .route("", web::post().to(create_sale))
            .route("/service-types", web::get().to(list_service_types))
            .route("/summary", web::get().to(sales_summary))
            .route("/{id}", web::delete().to(delete_sale)),
    );
}
