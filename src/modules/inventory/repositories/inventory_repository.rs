use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::core::traits::Repository;
use crate::core::{Calendar, Latency, MemoryStore, Result};
use crate::modules::inventory::models::{InventoryCategory, InventoryItem, InventoryUnit};

/// Inventory store, optionally pre-filled with the demo stock list
pub struct InventoryRepository;

impl InventoryRepository {
    pub fn in_memory(latency: Latency, seed: bool) -> Result<Arc<dyn Repository<InventoryItem>>> {
        let records = if seed {
            seed_inventory(Calendar::now())?
        } else {
            Vec::new()
        };
        Ok(Arc::new(MemoryStore::with_records(records, latency)))
    }
}

/// Demo stock list, all stamped `now`
pub fn seed_inventory(now: NaiveDateTime) -> Result<Vec<InventoryItem>> {
    use InventoryCategory::*;
    use InventoryUnit::*;

    let rows = [
        ("1", "A4 Paper (75gsm)", Paper, 50, Packets, 10),
        ("2", "Black Toner Cartridge", Toner, 5, Pcs, 2),
        ("3", "Color Ink Set", Ink, 12, Boxes, 5),
        ("4", "Glossy Photo Paper", PhotoPaper, 25, Packets, 5),
        ("5", "Stapler Pins", Stationery, 100, Boxes, 20),
        ("6", "Lamination Pouches", Other, 8, Packets, 3),
    ];

    rows.into_iter()
        .map(|(id, name, category, quantity, unit, reorder)| -> Result<InventoryItem> {
            let mut item = InventoryItem::new(
                name.to_string(),
                category,
                quantity,
                unit,
                Some(reorder),
                None,
                now,
            )?;
            item.id = Some(id.to_string());
            Ok(item)
        })
        .collect()
}
