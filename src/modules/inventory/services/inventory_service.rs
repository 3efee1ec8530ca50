use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::traits::Repository;
use crate::core::{AppError, Calendar, Result};
use crate::modules::inventory::models::{
    InventoryItem, InventoryItemRequest, InventoryItemResponse, InventoryUnit,
};
use crate::modules::reporting::{FilterEngine, FilterSpec};

/// Query string of the inventory list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQuery {
    /// Matched against item name and notes
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<InventoryUnit>,
    /// Only items at or below their reorder level
    #[serde(default)]
    pub low_stock: Option<bool>,
}

impl InventoryQuery {
    fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            category: self.category.clone(),
            date_from: None,
            date_to: None,
        }
    }
}

/// Filtered stock list plus the low-stock alert count over the same subset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryListing {
    pub items: Vec<InventoryItemResponse>,
    pub total_items: usize,
    pub low_stock_count: usize,
}

pub struct InventoryService {
    repo: Arc<dyn Repository<InventoryItem>>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn Repository<InventoryItem>>) -> Self {
        Self { repo }
    }

    pub async fn list_items(&self, query: &InventoryQuery) -> Result<InventoryListing> {
        let items = self.repo.list().await?;
        let filtered: Vec<InventoryItem> = FilterEngine::apply(&items, &query.filter_spec())
            .into_iter()
            .filter(|item| query.unit.map_or(true, |unit| item.unit == unit))
            .filter(|item| !query.low_stock.unwrap_or(false) || item.is_low_stock())
            .collect();

        let low_stock_count = filtered.iter().filter(|i| i.is_low_stock()).count();

        Ok(InventoryListing {
            total_items: filtered.len(),
            low_stock_count,
            items: filtered.into_iter().map(InventoryItemResponse::from).collect(),
        })
    }

    pub async fn all_items(&self) -> Result<Vec<InventoryItem>> {
        self.repo.list().await
    }

    pub async fn get_item(&self, id: &str) -> Result<InventoryItem> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Inventory item {}", id)))
    }

    /// Add a new item at the end of the stock list
    pub async fn create_item(&self, request: InventoryItemRequest) -> Result<InventoryItem> {
        let item = self.repo.upsert(request.into_item(Calendar::now())?).await?;

        info!("Inventory item created: id={:?}, name={}", item.id, item.item_name);
        Ok(item)
    }

    /// Replace the item with this id; an unknown id is stored as a new item
    pub async fn update_item(
        &self,
        id: &str,
        request: InventoryItemRequest,
    ) -> Result<InventoryItem> {
        let mut item = request.into_item(Calendar::now())?;
        item.id = Some(id.to_string());

        let item = self.repo.upsert(item).await?;

        if item.id.as_deref() != Some(id) {
            warn!(
                "Inventory item {} not found, stored as new item {:?}",
                id, item.id
            );
        } else {
            info!(
                "Inventory item updated: id={}, quantity={}, low_stock={}",
                id,
                item.quantity,
                item.is_low_stock()
            );
        }

        Ok(item)
    }

    /// Acknowledge a delete request for an existing item without applying it
    pub async fn request_deletion(&self, id: &str) -> Result<()> {
        let item = self.get_item(id).await?;

        warn!(
            "Inventory deletion requested but not supported by the store: id={}, name={}",
            id, item.item_name
        );
        Ok(())
    }
}
