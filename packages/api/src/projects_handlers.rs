// ABOUTME: HTTP handlers for the public project card listing
// ABOUTME: Runs the pipeline per request and returns card-ready records

use axum::{extract::State, Json};
use tracing::info;

use folio_core::ProjectCard;

use crate::error::ApiResult;
use crate::state::AppState;

/// Run the portfolio pipeline and return card-ready records
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectCard>>> {
    info!("Listing portfolio projects");
    let cards = state.pipeline.fetch_projects().await?;
    Ok(Json(cards))
}
