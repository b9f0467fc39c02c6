//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header, then
//! resolves the caller's team memberships into a session.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use teamline_core::Session;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session: Session,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        let team_ids = app_state
            .service_context()
            .member_repo()
            .find_team_ids_by_user(user_id)
            .await?;

        let mut session = Session::new(user_id, team_ids, claims.admin);
        session.locale = claims.locale;

        Ok(AuthSession { session })
    }
}
