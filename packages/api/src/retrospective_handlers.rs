// ABOUTME: HTTP handlers for per-project retrospectives
// ABOUTME: Reads are public; saving requires an admin bearer token

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use folio_core::{Retrospective, RetrospectiveUpsertInput};

use crate::error::{ApiResult, AppError};
use crate::extract::AdminUser;
use crate::state::AppState;

pub async fn get_retrospective(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<Retrospective>> {
    state
        .retrospectives
        .get_retrospective(&project_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Retrospective for {}", project_id)))
}

pub async fn upsert_retrospective(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(project_id): Path<String>,
    Json(input): Json<RetrospectiveUpsertInput>,
) -> ApiResult<Json<Retrospective>> {
    info!("Admin {} saving retrospective for {}", admin.email, project_id);
    let saved = state
        .retrospectives
        .upsert_retrospective(&project_id, input)
        .await?;
    Ok(Json(saved))
}
