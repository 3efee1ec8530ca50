// A single counter sale: one service, a quantity and a per-unit rate.
//
// The total is derived, never supplied: quantity, rate and total are private
// and every setter recomputes the total so `total == quantity * rate` holds
// for the life of the value. A change that would push the total past
// `MAX_RECORD_AMOUNT` is rejected and leaves the sale as it was.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceType;
use crate::core::money::MAX_RECORD_AMOUNT;
use crate::core::traits::Entity;
use crate::core::{AppError, Result};
use crate::modules::reporting::ReportRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: Option<String>,
    pub service_type: ServiceType,
    quantity: u32,
    rate: Decimal,
    total: Decimal,
    pub notes: Option<String>,
    pub date_created: NaiveDateTime,
}

impl Sale {
    /// Create a validated sale
    ///
    /// # Arguments
    /// * `quantity` - Must be at least 1
    /// * `rate` - Must be non-negative
    ///
    /// `quantity * rate` may not exceed [`MAX_RECORD_AMOUNT`].
    pub fn new(
        service_type: ServiceType,
        quantity: u32,
        rate: Decimal,
        notes: Option<String>,
        date_created: NaiveDateTime,
    ) -> Result<Self> {
        Self::validate_quantity(quantity)?;
        Self::validate_rate(rate)?;
        let total = Self::total_for(quantity, rate)?;

        Ok(Self {
            id: None,
            service_type,
            quantity,
            rate,
            total,
            notes: notes.filter(|n| !n.trim().is_empty()),
            date_created,
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<()> {
        Self::validate_quantity(quantity)?;
        self.total = Self::total_for(quantity, self.rate)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_rate(&mut self, rate: Decimal) -> Result<()> {
        Self::validate_rate(rate)?;
        self.total = Self::total_for(self.quantity, rate)?;
        self.rate = rate;
        Ok(())
    }

    /// Switch service and take over its default rate, as the sale form does
    pub fn apply_service(&mut self, service_type: ServiceType) -> Result<()> {
        self.set_rate(service_type.default_rate)?;
        self.service_type = service_type;
        Ok(())
    }

    fn total_for(quantity: u32, rate: Decimal) -> Result<Decimal> {
        Decimal::from(quantity)
            .checked_mul(rate)
            .filter(|total| *total <= MAX_RECORD_AMOUNT)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Sale total for {} x {} exceeds the maximum of {}",
                    quantity, rate, MAX_RECORD_AMOUNT
                ))
            })
    }

    fn validate_quantity(quantity: u32) -> Result<()> {
        if quantity < 1 {
            return Err(AppError::validation(format!(
                "Quantity must be at least 1, got: {}",
                quantity
            )));
        }
        Ok(())
    }

    fn validate_rate(rate: Decimal) -> Result<()> {
        if rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Rate must be non-negative, got: {}",
                rate
            )));
        }
        Ok(())
    }
}

impl Entity for Sale {
    const KIND: &'static str = "Sale";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl ReportRecord for Sale {
    fn occurred_at(&self) -> NaiveDateTime {
        self.date_created
    }

    fn amount(&self) -> Decimal {
        self.total
    }

    fn units(&self) -> Decimal {
        Decimal::from(self.quantity)
    }

    fn group_key(&self) -> &str {
        &self.service_type.name
    }

    fn filter_key(&self) -> &str {
        &self.service_type.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.service_type.name.as_str()];
        fields.extend(self.notes.as_deref());
        fields
    }
}

/// Request to record a sale
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    /// Catalog id of the service sold
    #[serde(alias = "serviceType")]
    pub service_type_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Falls back to the service's default rate
    #[serde(default)]
    pub rate: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to the current time
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,
}

fn default_quantity() -> u32 {
    1
}

/// Sale as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: String,
    pub service_type: ServiceType,
    pub quantity: u32,
    pub rate: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
    pub date_created: NaiveDateTime,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id.clone().unwrap_or_default(),
            quantity: sale.quantity,
            rate: sale.rate,
            total: sale.total,
            service_type: sale.service_type,
            notes: sale.notes,
            date_created: sale.date_created,
        }
    }
}
