use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    Json,
};
use models::food;
use service::{food::domain::FoodInput, ids::parse_id_list};

use crate::errors::ApiError;
use crate::extractors::{ApiJson, IdPath, IdsParam};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/foods", tag = "foods",
    responses(
        (status = 200, description = "All foods", body = [crate::openapi::FoodDoc]),
        (status = 500, description = "Store failure", body = crate::errors::ErrorBody)
    )
)]
pub async fn list_foods(State(state): State<AppState>) -> Result<Json<Vec<food::Model>>, ApiError> {
    let items = state.food.list().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get, path = "/foods/{id}", tag = "foods",
    params(("id" = i64, Path, description = "Food ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::FoodDoc),
        (status = 400, description = "Non-numeric id", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get_food(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<food::Model>, ApiError> {
    match state.food.get(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::NotFound(format!("food {id} not found"))),
    }
}

#[utoipa::path(
    post, path = "/foods", tag = "foods",
    request_body = crate::openapi::FoodInputDoc,
    responses(
        (status = 201, description = "Created; Location holds the new resource"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create_food(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<FoodInput>,
) -> Result<(StatusCode, [(HeaderName, String); 1]), ApiError> {
    let created = state.food.create(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/foods/{}", created.id))]))
}

#[utoipa::path(
    put, path = "/foods/{id}", tag = "foods",
    params(("id" = i64, Path, description = "Food ID")),
    request_body = crate::openapi::FoodInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update_food(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ApiJson(input): ApiJson<FoodInput>,
) -> Result<StatusCode, ApiError> {
    state.food.update(id, input).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/foods/{id}", tag = "foods",
    params(("id" = i64, Path, description = "Food ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn delete_food(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode, ApiError> {
    state.food.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/foods", tag = "foods",
    params(("ids" = String, Query, description = "Comma-separated ids; a form-urlencoded body field takes precedence")),
    responses(
        (status = 204, description = "All listed foods deleted"),
        (status = 400, description = "Blank or non-numeric ids", body = crate::errors::ErrorBody),
        (status = 404, description = "At least one id unknown; nothing deleted", body = crate::errors::ErrorBody)
    )
)]
pub async fn delete_foods(State(state): State<AppState>, IdsParam(raw): IdsParam) -> Result<StatusCode, ApiError> {
    let ids = parse_id_list(&raw)?;
    state.food.delete_many(&ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
