use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

/// A stocked household supply with an optional capacity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Inventory")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Quantity")]
    pub quantity: Option<f64>,
    #[sea_orm(column_name = "MaxQuantity")]
    pub max_quantity: Option<f64>,
    #[sea_orm(column_name = "Unit")]
    pub unit: Option<String>,
    #[sea_orm(column_name = "CreateDate")]
    pub create_date: DateTimeWithTimeZone,
    #[sea_orm(column_name = "UpdateDate")]
    pub update_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(
    name: &str,
    quantity: Option<f64>,
    max_quantity: Option<f64>,
    unit: Option<&str>,
) -> Result<(), errors::ModelError> {
    validation::validate_name(name)?;
    validation::validate_amount("quantity", quantity)?;
    validation::validate_amount("maxQuantity", max_quantity)?;
    validation::validate_unit(unit)?;
    Ok(())
}
