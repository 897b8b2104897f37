// ABOUTME: HTTP handlers for visitor feedback and its admin moderation
// ABOUTME: Visitors submit and read approved entries; admins approve and delete

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use folio_core::{Feedback, FeedbackCreateInput, FeedbackFilter};

use crate::error::{ApiResult, AppError};
use crate::extract::AdminUser;
use crate::state::AppState;

/// Feedback for a project card. Admins also see pending entries.
pub async fn list_project_feedback(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    admin: Option<AdminUser>,
) -> ApiResult<Json<Vec<Feedback>>> {
    let feedback = state
        .feedback
        .list_project_feedback(&project_id, admin.is_some())
        .await?;
    Ok(Json(feedback))
}

pub async fn create_feedback(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(input): Json<FeedbackCreateInput>,
) -> ApiResult<(StatusCode, Json<Feedback>)> {
    info!("New feedback for project {}", project_id);
    let feedback = state.feedback.create_feedback(&project_id, input).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackQuery {
    pub filter: Option<String>,
}

/// Moderation queue; `pending` unless a filter is given
pub async fn list_feedback(
    State(state): State<AppState>,
    admin: AdminUser,
    Query(query): Query<FeedbackQuery>,
) -> ApiResult<Json<Vec<Feedback>>> {
    let filter = match query.filter.as_deref() {
        None => FeedbackFilter::default(),
        Some(raw) => raw.parse::<FeedbackFilter>().map_err(AppError::BadRequest)?,
    };
    info!("Admin {} listing {} feedback", admin.email, filter);

    let feedback = state.feedback.list_feedback(filter).await?;
    Ok(Json(feedback))
}

pub async fn approve_feedback(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Feedback>> {
    info!("Admin {} approving feedback {}", admin.email, id);
    let feedback = state.feedback.approve_feedback(&id).await?;
    Ok(Json(feedback))
}

#[derive(Debug, Deserialize)]
pub struct BulkApproveRequest {
    pub ids: Vec<String>,
}

pub async fn approve_many(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(request): Json<BulkApproveRequest>,
) -> ApiResult<Json<Value>> {
    info!("Admin {} bulk-approving {} feedback", admin.email, request.ids.len());
    let approved = state.feedback.approve_many(&request.ids).await?;
    Ok(Json(json!({ "approved": approved })))
}

pub async fn delete_feedback(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("Admin {} deleting feedback {}", admin.email, id);
    state.feedback.delete_feedback(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
