mod sale;
mod service_type;

pub use sale::{CreateSaleRequest, Sale, SaleResponse};
pub use service_type::{catalog, ServiceType};
