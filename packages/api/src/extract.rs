// ABOUTME: Request extractors for admin-gated routes
// ABOUTME: Resolves the bearer token through the admin verifier held in state

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};

use folio_auth::bearer_token;

use crate::error::AppError;
use crate::state::AppState;

/// An allow-listed admin with a verified email
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
}

fn token_from_parts(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string)
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = token_from_parts(parts) else {
            debug!(path = %parts.uri.path(), "Missing bearer token");
            return Err(AppError::Unauthorized);
        };

        let verification = state.admin.verify(&token).await;
        match (verification.is_admin, verification.email) {
            (true, Some(email)) => Ok(AdminUser { email }),
            (false, Some(email)) => {
                warn!(path = %parts.uri.path(), email = %email, "Non-admin attempted admin route");
                Err(AppError::forbidden("Admin access required"))
            }
            _ => Err(AppError::Unauthorized),
        }
    }
}

/// `Option<AdminUser>` resolves to `None` instead of rejecting visitors
impl OptionalFromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <AdminUser as FromRequestParts<AppState>>::from_request_parts(parts, state).await {
            Ok(admin) => Ok(Some(admin)),
            Err(_) => Ok(None),
        }
    }
}
