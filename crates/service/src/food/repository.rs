use async_trait::async_trait;
use models::food;
use sea_orm::prelude::DateTimeWithTimeZone;

use super::domain::FoodInput;
use crate::errors::ServiceError;

/// Persistence capability needed by [`super::FoodService`].
/// `at` is the write time chosen by the caller; implementations store it verbatim.
#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<food::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<food::Model>, ServiceError>;
    async fn insert(&self, input: &FoodInput, at: DateTimeWithTimeZone) -> Result<food::Model, ServiceError>;
    /// `Ok(None)` when no row has this id.
    async fn update(&self, id: i64, input: &FoodInput, at: DateTimeWithTimeZone) -> Result<Option<food::Model>, ServiceError>;
    /// Returns false when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i64, food::Model>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct MockFoodRepository {
        state: Mutex<State>,
        unavailable: bool,
    }

    impl MockFoodRepository {
        /// Repository whose every call fails like a lost database connection.
        pub fn unavailable() -> Self {
            Self { unavailable: true, ..Self::default() }
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl FoodRepository for MockFoodRepository {
        async fn list(&self) -> Result<Vec<food::Model>, ServiceError> {
            self.check()?;
            Ok(self.state.lock().await.rows.values().cloned().collect())
        }

        async fn get(&self, id: i64) -> Result<Option<food::Model>, ServiceError> {
            self.check()?;
            Ok(self.state.lock().await.rows.get(&id).cloned())
        }

        async fn insert(&self, input: &FoodInput, at: DateTimeWithTimeZone) -> Result<food::Model, ServiceError> {
            self.check()?;
            let mut state = self.state.lock().await;
            state.last_id += 1;
            let model = food::Model {
                id: state.last_id,
                name: input.name.clone(),
                quantity: input.quantity,
                unit: input.unit.clone(),
                create_date: at,
                update_date: at,
            };
            state.rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn update(&self, id: i64, input: &FoodInput, at: DateTimeWithTimeZone) -> Result<Option<food::Model>, ServiceError> {
            self.check()?;
            let mut state = self.state.lock().await;
            let Some(row) = state.rows.get_mut(&id) else { return Ok(None) };
            row.name = input.name.clone();
            row.quantity = input.quantity;
            row.unit = input.unit.clone();
            row.update_date = at;
            Ok(Some(row.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            self.check()?;
            Ok(self.state.lock().await.rows.remove(&id).is_some())
        }

        async fn delete_many(&self, ids: &[i64]) -> Result<u64, ServiceError> {
            self.check()?;
            let mut state = self.state.lock().await;
            Ok(ids.iter().filter(|id| state.rows.remove(*id).is_some()).count() as u64)
        }
    }
}
