use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use models::food::{self, Entity as FoodEntity};
use crate::errors::ServiceError;
use crate::food::domain::FoodInput;
use crate::food::repository::FoodRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmFoodRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl FoodRepository for SeaOrmFoodRepository {
    async fn list(&self) -> Result<Vec<food::Model>, ServiceError> {
        let rows = FoodEntity::find().order_by_asc(food::Column::Id).all(&self.db).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<food::Model>, ServiceError> {
        Ok(FoodEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, input: &FoodInput, at: DateTimeWithTimeZone) -> Result<food::Model, ServiceError> {
        let am = food::ActiveModel {
            name: Set(input.name.clone()),
            quantity: Set(input.quantity),
            unit: Set(input.unit.clone()),
            create_date: Set(at),
            update_date: Set(at),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, id: i64, input: &FoodInput, at: DateTimeWithTimeZone) -> Result<Option<food::Model>, ServiceError> {
        let Some(existing) = FoodEntity::find_by_id(id).one(&self.db).await? else { return Ok(None) };
        let mut am: food::ActiveModel = existing.into();
        am.name = Set(input.name.clone());
        am.quantity = Set(input.quantity);
        am.unit = Set(input.unit.clone());
        am.update_date = Set(at);
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = FoodEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError> {
        let res = FoodEntity::delete_many()
            .filter(food::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::Utc;

    fn input(name: &str) -> FoodInput {
        FoodInput { name: name.into(), quantity: Some(1.0), unit: Some("pcs".into()) }
    }

    #[tokio::test]
    async fn food_repository_round_trip() -> Result<(), anyhow::Error> {
        let repo = SeaOrmFoodRepository { db: get_db().await? };
        let t0: DateTimeWithTimeZone = Utc::now().into();

        let a = repo.insert(&input("Apple"), t0).await?;
        let b = repo.insert(&input("Banana"), t0).await?;
        assert!(b.id > a.id);
        assert_eq!(a.create_date, t0);
        assert_eq!(a.update_date, t0);

        let listed = repo.list().await?;
        assert_eq!(listed.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, b.id]);

        let t1: DateTimeWithTimeZone = (Utc::now() + chrono::Duration::seconds(5)).into();
        let updated = repo.update(a.id, &input("Green apple"), t1).await?.unwrap();
        assert_eq!(updated.name, "Green apple");
        assert_eq!(updated.create_date, t0);
        assert_eq!(updated.update_date, t1);
        assert!(repo.update(9_999, &input("Ghost"), t1).await?.is_none());

        assert!(repo.delete(a.id).await?);
        assert!(!repo.delete(a.id).await?);
        assert_eq!(repo.delete_many(&[b.id, 9_999]).await?, 1);
        assert!(repo.list().await?.is_empty());
        Ok(())
    }
}
