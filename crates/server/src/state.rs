use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::food::{repo::seaorm::SeaOrmFoodRepository, repository::FoodRepository, FoodService};
use service::inventory::{
    repo::seaorm::SeaOrmInventoryRepository, repository::InventoryRepository, InventoryService,
};

/// Shared handler state; services are built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub food: Arc<FoodService>,
    pub inventory: Arc<InventoryService>,
}

impl AppState {
    pub fn new(food_repo: Arc<dyn FoodRepository>, inventory_repo: Arc<dyn InventoryRepository>) -> Self {
        Self {
            food: Arc::new(FoodService::new(food_repo)),
            inventory: Arc::new(InventoryService::new(inventory_repo)),
        }
    }

    /// SeaORM repositories sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmFoodRepository { db: db.clone() }),
            Arc::new(SeaOrmInventoryRepository { db }),
        )
    }
}
