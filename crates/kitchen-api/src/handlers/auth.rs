// ============================================================================
// Kitchen API - Auth Handlers
// File: crates/kitchen-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login, logout)

use axum::{extract::State, http::HeaderMap, Json};
use validator::Validate;

use crate::dto::{AuthResponse, LoginRequest};
use crate::error::ApiError;
use crate::middleware::bearer_token;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login handler - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    payload.validate()?;

    let session = state.auth.login(&payload.email, &payload.password).await?;
    Ok(Json(ApiResponse::success(AuthResponse::from(&session))))
}

/// Logout handler - POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if let Some(token) = bearer_token(&headers) {
        state.auth.logout(token).await?;
    }
    Ok(Json(ApiResponse::success(())))
}
