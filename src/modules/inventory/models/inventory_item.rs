// Stock on hand for one consumable, with its reorder threshold.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::traits::Entity;
use crate::core::{AppError, Result};
use crate::modules::reporting::ReportRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryCategory {
    Paper,
    Toner,
    Ink,
    #[serde(rename = "Photo Paper")]
    PhotoPaper,
    Stationery,
    Other,
}

impl InventoryCategory {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryCategory::Paper => "Paper",
            InventoryCategory::Toner => "Toner",
            InventoryCategory::Ink => "Ink",
            InventoryCategory::PhotoPaper => "Photo Paper",
            InventoryCategory::Stationery => "Stationery",
            InventoryCategory::Other => "Other",
        }
    }
}

impl fmt::Display for InventoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryUnit {
    Packets,
    Boxes,
    Liters,
    Pcs,
    Rolls,
}

/// Stock level relative to the reorder threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// At or below the reorder level
    Low,
    Normal,
    /// More than twice the reorder level
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Option<String>,
    pub item_name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    pub unit: InventoryUnit,
    pub reorder_level: Option<u32>,
    pub notes: Option<String>,
    pub last_updated: NaiveDateTime,
}

impl InventoryItem {
    pub fn new(
        item_name: String,
        category: InventoryCategory,
        quantity: u32,
        unit: InventoryUnit,
        reorder_level: Option<u32>,
        notes: Option<String>,
        last_updated: NaiveDateTime,
    ) -> Result<Self> {
        let item_name = item_name.trim().to_string();
        if item_name.is_empty() {
            return Err(AppError::validation("Item name cannot be empty"));
        }

        Ok(Self {
            id: None,
            item_name,
            category,
            quantity,
            unit,
            reorder_level,
            notes: notes.filter(|n| !n.trim().is_empty()),
            last_updated,
        })
    }

    /// True when a non-zero reorder level is set and stock has fallen to it
    pub fn is_low_stock(&self) -> bool {
        match self.reorder_level {
            Some(level) if level > 0 => self.quantity <= level,
            _ => false,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.is_low_stock() {
            StockStatus::Low
        } else if self.quantity > self.reorder_level.unwrap_or(0).saturating_mul(2) {
            StockStatus::Healthy
        } else {
            StockStatus::Normal
        }
    }
}

impl Entity for InventoryItem {
    const KIND: &'static str = "Inventory item";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn touch(&mut self, now: NaiveDateTime) {
        self.last_updated = now;
    }
}

impl ReportRecord for InventoryItem {
    fn occurred_at(&self) -> NaiveDateTime {
        self.last_updated
    }

    fn amount(&self) -> Decimal {
        Decimal::from(self.quantity)
    }

    fn group_key(&self) -> &str {
        self.category.label()
    }

    fn filter_key(&self) -> &str {
        self.category.label()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.item_name.as_str()];
        fields.extend(self.notes.as_deref());
        fields
    }
}

/// Body of the create and update endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemRequest {
    pub item_name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    pub unit: InventoryUnit,
    #[serde(default)]
    pub reorder_level: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InventoryItemRequest {
    pub fn into_item(self, now: NaiveDateTime) -> Result<InventoryItem> {
        InventoryItem::new(
            self.item_name,
            self.category,
            self.quantity,
            self.unit,
            self.reorder_level,
            self.notes,
            now,
        )
    }
}

/// Item as returned by the API, with its derived stock flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemResponse {
    pub id: String,
    pub item_name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    pub unit: InventoryUnit,
    pub reorder_level: Option<u32>,
    pub notes: Option<String>,
    pub last_updated: NaiveDateTime,
    pub low_stock: bool,
    pub stock_status: StockStatus,
}

impl From<InventoryItem> for InventoryItemResponse {
    fn from(item: InventoryItem) -> Self {
        let low_stock = item.is_low_stock();
        let stock_status = item.stock_status();
        Self {
            id: item.id.unwrap_or_default(),
            item_name: item.item_name,
            category: item.category,
            quantity: item.quantity,
            unit: item.unit,
            reorder_level: item.reorder_level,
            notes: item.notes,
            last_updated: item.last_updated,
            low_stock,
            stock_status,
        }
    }
}
