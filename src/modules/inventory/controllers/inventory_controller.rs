use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::inventory::models::{InventoryItemRequest, InventoryItemResponse};
use crate::modules::inventory::services::{InventoryQuery, InventoryService};

/// GET /inventory?search=&category=&unit=&lowStock=
pub async fn list_items(
    service: web::Data<Arc<InventoryService>>,
    query: web::Query<InventoryQuery>,
) -> Result<HttpResponse, AppError> {
    let listing = service.list_items(&query).await?;

    Ok(HttpResponse::Ok().json(listing))
}

/// GET /inventory/{id}
pub async fn get_item(
    service: web::Data<Arc<InventoryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let item = service.get_item(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(InventoryItemResponse::from(item)))
}

/// POST /inventory
pub async fn create_item(
    service: web::Data<Arc<InventoryService>>,
    request: web::Json<InventoryItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = service.create_item(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(InventoryItemResponse::from(item)))
}

/// PUT /inventory/{id}
pub async fn update_item(
    service: web::Data<Arc<InventoryService>>,
    path: web::Path<String>,
    request: web::Json<InventoryItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = service
        .update_item(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(InventoryItemResponse::from(item)))
}

/// DELETE /inventory/{id}
pub async fn delete_item(
    service: web::Data<Arc<InventoryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.request_deletion(&id).await?;

    Ok(HttpResponse::Accepted().json(serde_json::json!({ "id": id, "deleted": false })))
}

/// Configure inventory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/inventory")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}
