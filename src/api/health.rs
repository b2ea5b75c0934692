//! Health check and welcome endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use super::response::{ApiResponse, Empty};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    ApiResponse::ok(
        "API is running",
        HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome message")
    )
)]
pub async fn root() -> Json<ApiResponse<Empty>> {
    ApiResponse::ok("Welcome to the Bookshelf API", Empty::default())
}
