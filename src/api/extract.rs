//! Session extraction from the `Authorization` header.

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::auth::domain::{Session, SessionToken};
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

fn bearer_token(parts: &Parts) -> Option<SessionToken> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let raw = header.strip_prefix("Bearer ")?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(SessionToken::new(raw))
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Err(ApiError::Unauthorized);
        };
        state
            .sessions()
            .resolve(&token)
            .await?
            .ok_or(ApiError::Unauthorized)
    }
}
