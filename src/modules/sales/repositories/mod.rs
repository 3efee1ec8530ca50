mod sale_repository;

pub use sale_repository::{seed_sales, SaleRepository, ServiceCatalog};
