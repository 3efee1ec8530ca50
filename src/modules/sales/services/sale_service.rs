use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::traits::Repository;
use crate::core::{AppError, Calendar, Result};
use crate::modules::reporting::{build_summary, FilterEngine, FilterSpec, SummaryReport};
use crate::modules::sales::models::{CreateSaleRequest, Sale, ServiceType};
use crate::modules::sales::repositories::ServiceCatalog;

/// Sales ledger operations and the sales summary view
pub struct SaleService {
    repo: Arc<dyn Repository<Sale>>,
    catalog: ServiceCatalog,
}

impl SaleService {
    pub fn new(repo: Arc<dyn Repository<Sale>>, catalog: ServiceCatalog) -> Self {
        Self { repo, catalog }
    }

    /// Record a sale for a catalog service.
    ///
    /// The rate defaults to the service's default rate; the timestamp to now.
    pub async fn create_sale(&self, request: CreateSaleRequest) -> Result<Sale> {
        let service_type = self
            .catalog
            .find(&request.service_type_id)
            .await
            .ok_or_else(|| {
                AppError::validation(format!("Unknown service type: {}", request.service_type_id))
            })?;

        let rate = request.rate.unwrap_or(service_type.default_rate);
        let sale = Sale::new(
            service_type,
            request.quantity,
            rate,
            request.notes,
            request.date_created.unwrap_or_else(Calendar::now),
        )?;

        let sale = self.repo.create(sale).await?;

        info!(
            "Sale recorded: id={:?}, service={}, total={}",
            sale.id,
            sale.service_type.name,
            sale.total()
        );

        Ok(sale)
    }

    /// Sales matching the filter, newest first
    pub async fn list_sales(&self, spec: &FilterSpec) -> Result<Vec<Sale>> {
        let sales = self.repo.list().await?;
        Ok(FilterEngine::apply(&sales, spec))
    }

    /// Every sale in the ledger, unfiltered
    pub async fn all_sales(&self) -> Result<Vec<Sale>> {
        self.repo.list().await
    }

    pub async fn service_types(&self) -> Vec<ServiceType> {
        self.catalog.list().await
    }

    /// KPIs, per-service breakdown and daily revenue trend for a filter state
    pub async fn summary(&self, spec: &FilterSpec, today: NaiveDate) -> Result<SummaryReport> {
        let sales = self.repo.list().await?;
        let report = build_summary(&sales, spec, today);

        if report.kpis.count == 0 {
            warn!("Sales summary matched no records: filter={:?}", spec);
        } else {
            info!(
                "Sales summary generated: {} sales, revenue={}, {} services",
                report.kpis.count,
                report.kpis.total,
                report.breakdown.len()
            );
        }

        Ok(report)
    }

    /// Acknowledge a delete request for an existing sale without applying it
    pub async fn request_deletion(&self, id: &str) -> Result<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Sale {}", id)))?;

        warn!("Sale deletion requested but not supported by the store: id={}", id);
        Ok(())
    }
}
