// Sales module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Sale, ServiceType};
pub use repositories::{SaleRepository, ServiceCatalog};
pub use services::SaleService;
