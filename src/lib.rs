//! printdesk: back-office service for a print and copy shop
//!
//! Holds the session's sales, expenses and inventory records and serves the
//! filtered listings, KPI summaries, breakdowns and trends the dashboard renders.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::web;

use crate::config::{ServerConfig, StoreConfig};
use crate::modules::dashboard::DashboardService;
use crate::modules::expenses::{ExpenseRepository, ExpenseService};
use crate::modules::inventory::{InventoryRepository, InventoryService};
use crate::modules::reports::ReportService;
use crate::modules::sales::{SaleRepository, SaleService, ServiceCatalog};

// Re-export commonly used types
pub use modules::{dashboard, expenses, inventory, reporting, reports, sales};

/// Services shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub sales: Arc<SaleService>,
    pub expenses: Arc<ExpenseService>,
    pub inventory: Arc<InventoryService>,
    pub reports: Arc<ReportService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    /// Build the stores and services described by the store configuration
    pub fn from_config(store: &StoreConfig) -> crate::core::Result<Self> {
        let latency = store.latency();
        let seed = store.seed_demo_data;

        let sales = Arc::new(SaleService::new(
            SaleRepository::in_memory(latency, seed)?,
            ServiceCatalog::new(Duration::from_millis(store.find_latency_ms)),
        ));
        let expenses = Arc::new(ExpenseService::new(ExpenseRepository::in_memory(
            latency, seed,
        )?));
        let inventory = Arc::new(InventoryService::new(InventoryRepository::in_memory(
            latency, seed,
        )?));

        Ok(Self {
            reports: Arc::new(ReportService::new(sales.clone(), expenses.clone())),
            dashboard: Arc::new(DashboardService::new(
                sales.clone(),
                expenses.clone(),
                inventory.clone(),
            )),
            sales,
            expenses,
            inventory,
        })
    }

    /// Register shared state, extractor error handling and all routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.sales.clone()))
            .app_data(web::Data::new(self.expenses.clone()))
            .app_data(web::Data::new(self.inventory.clone()))
            .app_data(web::Data::new(self.reports.clone()))
            .app_data(web::Data::new(self.dashboard.clone()))
            .app_data(middleware::json_config())
            .app_data(middleware::query_config())
            .configure(modules::health::controllers::configure)
            .service(
                web::scope("/api")
                    .configure(modules::sales::controllers::configure)
                    .configure(modules::expenses::controllers::configure)
                    .configure(modules::inventory::controllers::configure)
                    .configure(modules::reports::controllers::configure)
                    .configure(modules::dashboard::controllers::configure),
            );
    }
}

/// CORS policy for the dashboard front-end
pub fn cors(server: &ServerConfig) -> Cors {
    let cors = match &server.allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .expose_headers(vec![middleware::REQUEST_ID_HEADER])
        .max_age(3600)
}
