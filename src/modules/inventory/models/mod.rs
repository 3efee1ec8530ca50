mod inventory_item;

pub use inventory_item::{
    InventoryCategory, InventoryItem, InventoryItemRequest, InventoryItemResponse, InventoryUnit,
    StockStatus,
};
