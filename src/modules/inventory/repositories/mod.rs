mod inventory_repository;

pub use inventory_repository::{seed_inventory, InventoryRepository};
