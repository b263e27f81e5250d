use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use models::inventory::{self, Entity as InventoryEntity};
use crate::errors::ServiceError;
use crate::inventory::domain::InventoryInput;
use crate::inventory::repository::InventoryRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmInventoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn list(&self) -> Result<Vec<inventory::Model>, ServiceError> {
        let rows = InventoryEntity::find().order_by_asc(inventory::Column::Id).all(&self.db).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<inventory::Model>, ServiceError> {
        Ok(InventoryEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, input: &InventoryInput, at: DateTimeWithTimeZone) -> Result<inventory::Model, ServiceError> {
        let am = inventory::ActiveModel {
            name: Set(input.name.clone()),
            quantity: Set(input.quantity),
            max_quantity: Set(input.max_quantity),
            unit: Set(input.unit.clone()),
            create_date: Set(at),
            update_date: Set(at),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, id: i64, input: &InventoryInput, at: DateTimeWithTimeZone) -> Result<Option<inventory::Model>, ServiceError> {
        let Some(existing) = InventoryEntity::find_by_id(id).one(&self.db).await? else { return Ok(None) };
        let mut am: inventory::ActiveModel = existing.into();
        am.name = Set(input.name.clone());
        am.quantity = Set(input.quantity);
        am.max_quantity = Set(input.max_quantity);
        am.unit = Set(input.unit.clone());
        am.update_date = Set(at);
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = InventoryEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError> {
        let res = InventoryEntity::delete_many()
            .filter(inventory::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
