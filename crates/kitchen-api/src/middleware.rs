//! Admin-gating middleware.
//!
//! Every privileged route passes through `require_admin`, which resolves
//! the bearer token to a server-side session and re-reads the profile's
//! role from the gateway. Nothing about the caller is trusted from client
//! storage.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// The admin identity attached to the request after the gate passes.
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub id: Uuid,
    pub email: String,
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let profile = state.auth.authorize_admin(token).await?;
    request.extensions_mut().insert(CurrentAdmin {
        id: profile.id,
        email: profile.email,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc123"));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
