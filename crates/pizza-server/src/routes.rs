use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pizza_core::{DocumentStore, Record};
use pizza_core::models::parse_payload;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::{AppState, Resource};

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/authorization",
            get(list_authorization).post(create_authorization),
        )
        .route("/orders", get(list_orders).post(create_order))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

async fn list_records(resource: &Resource) -> Result<axum::Json<Vec<Record>>, ApiError> {
    let records = resource.list().await?;
    Ok(axum::Json(records))
}

async fn create_record(
    resource: &Resource,
    body: &[u8],
) -> Result<axum::Json<Record>, ApiError> {
    let payload = parse_payload(body)?;
    let record = resource.create(&payload).await?;
    tracing::info!(
        collection = resource.spec().collection,
        id = record.get("id").and_then(serde_json::Value::as_str).unwrap_or_default(),
        "Record created"
    );
    Ok(axum::Json(record))
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/authorization",
    responses(
        (status = 200, description = "All authorization records", body = Vec<crate::dto::AuthorizationRecord>),
        (status = 500, description = "Server error", body = crate::dto::ErrorResponse),
    ),
    tag = "authorization"
)]
pub async fn list_authorization(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    list_records(&state.authorization).await
}

#[utoipa::path(
    post,
    path = "/authorization",
    request_body = crate::dto::AuthorizationRecord,
    responses(
        (status = 200, description = "Authorization recorded", body = crate::dto::AuthorizationRecord),
        (status = 500, description = "Server error", body = crate::dto::ErrorResponse),
    ),
    tag = "authorization"
)]
pub async fn create_authorization(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    create_record(&state.authorization, &body).await
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = Vec<crate::dto::OrderRecord>),
        (status = 500, description = "Server error", body = crate::dto::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    list_records(&state.orders).await
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = crate::dto::OrderRecord,
    responses(
        (status = 200, description = "Order placed", body = crate::dto::OrderRecord),
        (status = 500, description = "Server error", body = crate::dto::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    create_record(&state.orders, &body).await
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(HealthResponse {
                status: "healthy",
                store: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                axum::Json(HealthResponse {
                    status: "unhealthy",
                    store: "error",
                }),
            )
        }
    }
}
