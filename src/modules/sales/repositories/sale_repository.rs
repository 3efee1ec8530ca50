use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::core::traits::Repository;
use crate::core::{AppError, Calendar, Latency, MemoryStore, Result};
use crate::modules::sales::models::{catalog, Sale, ServiceType};

/// Sales store, optionally pre-filled with the demo ledger
pub struct SaleRepository;

impl SaleRepository {
    pub fn in_memory(latency: Latency, seed: bool) -> Result<Arc<dyn Repository<Sale>>> {
        let records = if seed { seed_sales()? } else { Vec::new() };
        Ok(Arc::new(MemoryStore::with_records(records, latency)))
    }
}

/// Read-only service catalog with the same simulated lookup delay as the store
pub struct ServiceCatalog {
    services: Vec<ServiceType>,
    latency: Duration,
}

impl ServiceCatalog {
    pub fn new(latency: Duration) -> Self {
        Self {
            services: catalog(),
            latency,
        }
    }

    pub async fn list(&self) -> Vec<ServiceType> {
        self.wait().await;
        self.services.clone()
    }

    pub async fn find(&self, id: &str) -> Option<ServiceType> {
        self.wait().await;
        self.services.iter().find(|s| s.id == id).cloned()
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// Demo sales for the first week of December 2025, newest first
pub fn seed_sales() -> Result<Vec<Sale>> {
    let services = catalog();
    let service = |id: &str| {
        services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::internal(format!("Unknown seed service {}", id)))
    };

    let rows = [
        ("1", "1", 10, 2, "Project report", Calendar::at(2025, 12, 10, 10, 30)?),
        ("2", "3", 5, 5, "Resume printing", Calendar::at(2025, 12, 9, 14, 15)?),
        ("3", "6", 2, 40, "ID Cards", Calendar::at(2025, 12, 8, 9, 45)?),
        ("4", "9", 1, 20, "Form filling", Calendar::at(2025, 12, 10, 11, 0)?),
        ("5", "2", 3, 10, "Certificates", Calendar::at(2025, 12, 7, 16, 20)?),
    ];

    rows.into_iter()
        .map(|(id, service_id, quantity, rate, notes, at)| -> Result<Sale> {
            let mut sale = Sale::new(
                service(service_id)?,
                quantity,
                Decimal::from(rate),
                Some(notes.to_string()),
                at,
            )?;
            sale.id = Some(id.to_string());
            Ok(sale)
        })
        .collect()
}
