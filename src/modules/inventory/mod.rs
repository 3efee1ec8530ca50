// Inventory module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{InventoryCategory, InventoryItem, InventoryUnit, StockStatus};
pub use repositories::InventoryRepository;
pub use services::InventoryService;
