// handlers/system.rs - GET /, GET /health and the JSON 404 fallback

use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::server::AppState;

/// GET / - Service name, version and endpoint map
pub async fn root() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "name": "Country Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "home": "GET / (public)",
            "health": "GET /health (public)",
            "country_delete": "POST /api/countries/delete (admin flag required)",
            "legacy_country_delete": "POST /delete_country.php (alias)",
        }
    }))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    let now = chrono::Utc::now();

    match state.repository.health_check().await {
        Ok(()) => ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "database": "ok"
        })),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            ApiResponse::with_status(
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "error": "database unavailable"
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            )
        }
    }
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("not found")
}
