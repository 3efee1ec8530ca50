pub mod inventory_service;

pub use inventory_service::{InventoryListing, InventoryQuery, InventoryService};
