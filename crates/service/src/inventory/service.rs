use std::sync::Arc;

use chrono::Utc;
use models::inventory;
use tracing::{info, instrument};

use super::domain::InventoryInput;
use super::repository::InventoryRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "inventory";

/// Application service for inventory items.
pub struct InventoryService {
    repo: Arc<dyn InventoryRepository>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<inventory::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<inventory::Model>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: InventoryInput) -> Result<inventory::Model, ServiceError> {
        input.validate()?;
        let now = Utc::now().into();
        let created = self.repo.insert(&input, now).await?;
        info!(id = created.id, "inventory_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: InventoryInput) -> Result<inventory::Model, ServiceError> {
        input.validate()?;
        let now = Utc::now().into();
        let updated = self
            .repo
            .update(id, &input, now)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "inventory_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(id, "inventory_deleted");
        Ok(())
    }

    /// All-or-nothing: unknown ids are reported before any row is removed.
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
        info!(deleted, "inventory_bulk_deleted");
        Ok(deleted)
    }
}
