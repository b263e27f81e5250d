use std::sync::Arc;

use chrono::Utc;
use models::food;
use tracing::{info, instrument};

use super::domain::FoodInput;
use super::repository::FoodRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "food";

/// Application service for food records.
/// Owns the timestamps: `create_date` and `update_date` are set here, never taken from input.
pub struct FoodService {
    repo: Arc<dyn FoodRepository>,
}

impl FoodService {
    pub fn new(repo: Arc<dyn FoodRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<food::Model>, ServiceError> {
        self.repo.list().await
    }

    /// `Ok(None)` when the id is unknown.
    pub async fn get(&self, id: i64) -> Result<Option<food::Model>, ServiceError> {
        self.repo.get(id).await
    }

    /// Create a food with both timestamps set to the same instant.
    ///
    /// # Examples
    /// ```
    /// use service::food::{FoodService, domain::FoodInput, repository::mock::MockFoodRepository};
    /// use std::sync::Arc;
    /// let svc = FoodService::new(Arc::new(MockFoodRepository::default()));
    /// let input = FoodInput { name: "Milk".into(), quantity: Some(1.0), unit: Some("l".into()) };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.create_date, created.update_date);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: FoodInput) -> Result<food::Model, ServiceError> {
        input.validate()?;
        let now = Utc::now().into();
        let created = self.repo.insert(&input, now).await?;
        info!(id = created.id, "food_created");
        Ok(created)
    }

    /// Overwrite the mutable fields; keeps `create_date`, refreshes `update_date`.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: FoodInput) -> Result<food::Model, ServiceError> {
        input.validate()?;
        let now = Utc::now().into();
        let updated = self
            .repo
            .update(id, &input, now)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "food_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(id, "food_deleted");
        Ok(())
    }

    /// Delete every id or none: all ids are checked first and a single
    /// missing id aborts the batch before anything is removed.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError> {
        if ids.is_empty() {
            return Err(ServiceError::Validation(crate::ids::BLANK_IDS.into()));
        }
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let mut missing = Vec::new();
        for &id in &unique {
            if self.repo.get(id).await?.is_none() {
                missing.push(id);
            }
        }
        if !missing.is_empty() {
            return Err(ServiceError::not_found_many(ENTITY, &missing));
        }

        let deleted = self.repo.delete_many(&unique).await?;
        info!(deleted, "food_bulk_deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::repo::seaorm::SeaOrmFoodRepository;
    use crate::food::repository::mock::MockFoodRepository;
    use crate::test_support::get_db;
    use std::time::Duration;

    fn milk() -> FoodInput {
        FoodInput { name: "Milk".into(), quantity: Some(2.0), unit: Some("l".into()) }
    }

    fn mock_service() -> FoodService {
        FoodService::new(Arc::new(MockFoodRepository::default()))
    }

    #[tokio::test]
    async fn create_then_get_returns_submitted_fields() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let created = svc.create(milk()).await?;
        let found = svc.get(created.id).await?.unwrap();
        assert_eq!(found.name, "Milk");
        assert_eq!(found.quantity, Some(2.0));
        assert_eq!(found.unit.as_deref(), Some("l"));
        assert_eq!(found.create_date, found.update_date);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() -> Result<(), anyhow::Error> {
        assert!(mock_service().get(42).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let svc = mock_service();
        let err = svc.create(FoodInput { name: " ".into(), ..milk() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_create_date_and_advances_update_date() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let created = svc.create(milk()).await?;
        tokio::time::sleep(Duration::from_millis(5)).await;

        let updated = svc.update(created.id, FoodInput { quantity: Some(0.5), ..milk() }).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.quantity, Some(0.5));
        assert_eq!(updated.create_date, created.create_date);
        assert!(updated.update_date > created.update_date);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_mutates_nothing() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let created = svc.create(milk()).await?;
        let err = svc.update(created.id + 1, FoodInput { name: "Other".into(), ..milk() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(svc.list().await?, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_then_reports_not_found() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let created = svc.create(milk()).await?;
        svc.delete(created.id).await?;
        assert!(svc.get(created.id).await?.is_none());
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_many_with_missing_id_deletes_nothing() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let a = svc.create(milk()).await?;
        let b = svc.create(milk()).await?;

        let err = svc.delete_many(&[a.id, b.id, 999]).await.unwrap_err();
        match err {
            ServiceError::NotFound(msg) => assert!(msg.contains("999")),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(svc.list().await?.len(), 2);

        assert_eq!(svc.delete_many(&[a.id, b.id, a.id]).await?, 2);
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn store_failures_surface_as_db_errors() {
        let svc = FoodService::new(Arc::new(MockFoodRepository::unavailable()));
        let err = svc.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
    }

    #[tokio::test]
    async fn food_crud_service_on_sqlite() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = FoodService::new(Arc::new(SeaOrmFoodRepository { db }));

        let created = svc.create(milk()).await?;
        let found = svc.get(created.id).await?.unwrap();
        assert_eq!(found, created);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let updated = svc.update(created.id, FoodInput { name: "Oat milk".into(), ..milk() }).await?;
        assert_eq!(updated.create_date, created.create_date);
        assert!(updated.update_date > created.update_date);

        let other = svc.create(milk()).await?;
        assert!(matches!(svc.delete_many(&[created.id, other.id + 100]).await, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.list().await?.len(), 2);
        assert_eq!(svc.delete_many(&[created.id, other.id]).await?, 2);
        assert!(svc.list().await?.is_empty());
        Ok(())
    }
}
