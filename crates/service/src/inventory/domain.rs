use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Create/update payload for an inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInput {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub max_quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl InventoryInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::inventory::validate(&self.name, self.quantity, self.max_quantity, self.unit.as_deref())?;
        Ok(())
    }
}
