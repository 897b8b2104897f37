// ABOUTME: HTTP handlers for admin sign-in and session verification
// ABOUTME: Email pre-check, magic-link dispatch and bearer token verification

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use folio_auth::bearer_token;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: String,
}

/// Tell the login form whether an email may request a sign-in link
pub async fn check_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Json<Value> {
    let allowed = state.admin.is_allowed_email(&request.email);
    Json(json!({ "allowed": allowed }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> ApiResult<Json<Value>> {
    state.admin.send_login_link(&request.email).await?;
    info!("Sign-in link requested for admin");
    Ok(Json(json!({
        "success": true,
        "message": "Check your email for the sign-in link"
    })))
}

/// Report whether the bearer token belongs to an admin.
/// A token that resolves to no verified account is a 401.
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);

    let Some(token) = token else {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "isAdmin": false })));
    };

    let verification = state.admin.verify(token).await;
    match verification.email {
        Some(email) => (
            StatusCode::OK,
            Json(json!({
                "isAdmin": verification.is_admin,
                "user": { "email": email }
            })),
        ),
        None => (StatusCode::UNAUTHORIZED, Json(json!({ "isAdmin": false }))),
    }
}
