use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodInputDoc {
    #[schema(example = "Milk")]
    pub name: String,
    #[schema(example = 2.0)]
    pub quantity: Option<f64>,
    #[schema(example = "l")]
    pub unit: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodDoc {
    pub id: i64,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[schema(example = "2024-06-01T10:00:00+00:00")]
    pub create_date: String,
    #[schema(example = "2024-06-01T10:00:00+00:00")]
    pub update_date: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInputDoc {
    #[schema(example = "Rice")]
    pub name: String,
    pub quantity: Option<f64>,
    pub max_quantity: Option<f64>,
    #[schema(example = "kg")]
    pub unit: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDoc {
    pub id: i64,
    pub name: String,
    pub quantity: Option<f64>,
    pub max_quantity: Option<f64>,
    pub unit: Option<String>,
    pub create_date: String,
    pub update_date: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::foods::list_foods,
        crate::routes::foods::get_food,
        crate::routes::foods::create_food,
        crate::routes::foods::update_food,
        crate::routes::foods::delete_food,
        crate::routes::foods::delete_foods,
        crate::routes::inventories::list_inventories,
        crate::routes::inventories::get_inventory,
        crate::routes::inventories::create_inventory,
        crate::routes::inventories::update_inventory,
        crate::routes::inventories::delete_inventory,
        crate::routes::inventories::delete_inventories,
    ),
    components(
        schemas(
            HealthResponse,
            FoodInputDoc,
            FoodDoc,
            InventoryInputDoc,
            InventoryDoc,
            crate::errors::ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "foods"),
        (name = "inventories")
    )
)]
pub struct ApiDoc;
