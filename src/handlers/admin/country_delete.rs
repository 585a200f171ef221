// handlers/admin/country_delete.rs - POST /api/countries/delete handler

use axum::extract::State;
use serde::Serialize;
use tracing::{debug, info};

use crate::api::JsonBody;
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::server::AppState;

pub const IDS_REQUIRED: &str = "user_id and country_id required";
pub const FORBIDDEN: &str = "forbidden";

#[derive(Debug, Serialize)]
pub struct DeleteCountryResponse {
    pub ok: bool,
}

/// POST /api/countries/delete - Delete a country as an admin user
///
/// Expected Input:
/// ```json
/// { "user_id": 5, "country_id": 42 }
/// ```
///
/// Both ids are coerced to integers and must be positive (400 otherwise). The
/// user must exist with admin flag 1 (403 otherwise). The delete runs without an
/// existence check, so deleting a missing country still answers `{"ok": true}`.
pub async fn country_delete(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<DeleteCountryResponse> {
    let user_id = body.int("user_id");
    let country_id = body.int("country_id");

    if user_id <= 0 || country_id <= 0 {
        debug!(user_id, country_id, "Rejected country delete: invalid ids");
        return Err(ApiError::validation_error(IDS_REQUIRED));
    }

    let user = state.repository.find_user(user_id).await?;
    if !user.as_ref().is_some_and(User::has_admin_flag) {
        debug!(user_id, country_id, "Rejected country delete: not an admin");
        return Err(ApiError::forbidden(FORBIDDEN));
    }

    let removed = state.repository.delete_country(country_id).await?;
    info!(user_id, country_id, removed, "Country delete executed");

    Ok(ApiResponse::success(DeleteCountryResponse { ok: true }))
}
