use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    Json,
};
use models::inventory;
use service::{inventory::domain::InventoryInput, ids::parse_id_list};

use crate::errors::ApiError;
use crate::extractors::{ApiJson, IdPath, IdsParam};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/inventories", tag = "inventories",
    responses(
        (status = 200, description = "All inventory items", body = [crate::openapi::InventoryDoc]),
        (status = 500, description = "Store failure", body = crate::errors::ErrorBody)
    )
)]
pub async fn list_inventories(State(state): State<AppState>) -> Result<Json<Vec<inventory::Model>>, ApiError> {
    let items = state.inventory.list().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get, path = "/inventories/{id}", tag = "inventories",
    params(("id" = i64, Path, description = "Inventory ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::InventoryDoc),
        (status = 400, description = "Non-numeric id", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get_inventory(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<inventory::Model>, ApiError> {
    match state.inventory.get(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::NotFound(format!("inventory {id} not found"))),
    }
}

#[utoipa::path(
    post, path = "/inventories", tag = "inventories",
    request_body = crate::openapi::InventoryInputDoc,
    responses(
        (status = 201, description = "Created; Location holds the new resource"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<InventoryInput>,
) -> Result<(StatusCode, [(HeaderName, String); 1]), ApiError> {
    let created = state.inventory.create(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/inventories/{}", created.id))]))
}

#[utoipa::path(
    put, path = "/inventories/{id}", tag = "inventories",
    params(("id" = i64, Path, description = "Inventory ID")),
    request_body = crate::openapi::InventoryInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ApiJson(input): ApiJson<InventoryInput>,
) -> Result<StatusCode, ApiError> {
    state.inventory.update(id, input).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/inventories/{id}", tag = "inventories",
    params(("id" = i64, Path, description = "Inventory ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn delete_inventory(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode, ApiError> {
    state.inventory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/inventories", tag = "inventories",
    params(("ids" = String, Query, description = "Comma-separated ids; a form-urlencoded body field takes precedence")),
    responses(
        (status = 204, description = "All listed items deleted"),
        (status = 400, description = "Blank or non-numeric ids", body = crate::errors::ErrorBody),
        (status = 404, description = "At least one id unknown; nothing deleted", body = crate::errors::ErrorBody)
    )
)]
pub async fn delete_inventories(State(state): State<AppState>, IdsParam(raw): IdsParam) -> Result<StatusCode, ApiError> {
    let ids = parse_id_list(&raw)?;
    state.inventory.delete_many(&ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
