pub mod foods;
pub mod inventories;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Logs method and path of every resource request before its handler runs.
async fn log_api_request(req: Request, next: Next) -> Response {
    info!(method = %req.method(), path = %req.uri().path(), "api_request");
    next.run(req).await
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/foods",
            get(foods::list_foods)
                .post(foods::create_food)
                .delete(foods::delete_foods),
        )
        .route(
            "/foods/:id",
            get(foods::get_food)
                .put(foods::update_food)
                .delete(foods::delete_food),
        )
        .route(
            "/inventories",
            get(inventories::list_inventories)
                .post(inventories::create_inventory)
                .delete(inventories::delete_inventories),
        )
        .route(
            "/inventories/:id",
            get(inventories::get_inventory)
                .put(inventories::update_inventory)
                .delete(inventories::delete_inventory),
        )
        .route_layer(middleware::from_fn(log_api_request))
}

/// Build the full application router: health, both resources and the API docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(resource_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
