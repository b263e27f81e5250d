use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Client-supplied food fields for create and update.
/// Carries no id and no timestamps; both are owned by the store and the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodInput {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl FoodInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::food::validate(&self.name, self.quantity, self.unit.as_deref())?;
        Ok(())
    }
}
