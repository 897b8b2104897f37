// ABOUTME: HTTP API layer for Folio providing REST endpoints and routing
// ABOUTME: Integration layer over the pipeline, storage and admin packages

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod admin_handlers;
pub mod error;
pub mod extract;
pub mod feedback_handlers;
pub mod health;
pub mod projects_handlers;
pub mod retrospective_handlers;
pub mod state;

pub use error::{ApiResult, AppError};
pub use extract::AdminUser;
pub use state::AppState;

/// Routes under `/api/projects`
pub fn create_projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects_handlers::list_projects))
        .route(
            "/{project_id}/feedback",
            get(feedback_handlers::list_project_feedback).post(feedback_handlers::create_feedback),
        )
        .route(
            "/{project_id}/retrospective",
            get(retrospective_handlers::get_retrospective)
                .put(retrospective_handlers::upsert_retrospective),
        )
}

/// Routes under `/api/admin`
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/check-email", post(admin_handlers::check_email))
        .route("/login", post(admin_handlers::login))
        .route("/verify", get(admin_handlers::verify))
        .route("/feedback", get(feedback_handlers::list_feedback))
        .route("/feedback/approve", post(feedback_handlers::approve_many))
        .route("/feedback/{id}/approve", post(feedback_handlers::approve_feedback))
        .route("/feedback/{id}", delete(feedback_handlers::delete_feedback))
}

/// Full application router with state applied
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/projects", create_projects_router())
        .nest("/api/admin", create_admin_router())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
