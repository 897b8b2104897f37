// ABOUTME: Shared application state handed to every handler
// ABOUTME: Holds the pipeline, both stores and the admin verifier

use std::sync::Arc;

use folio_auth::AdminVerifier;
use folio_projects::PortfolioPipeline;
use folio_storage::{FeedbackStorage, RetrospectiveStorage, SqlitePool};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PortfolioPipeline>,
    pub feedback: Arc<FeedbackStorage>,
    pub retrospectives: Arc<RetrospectiveStorage>,
    pub admin: Arc<dyn AdminVerifier>,
}

impl AppState {
    pub fn new(
        pipeline: PortfolioPipeline,
        pool: SqlitePool,
        admin: Arc<dyn AdminVerifier>,
    ) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            feedback: Arc::new(FeedbackStorage::new(pool.clone())),
            retrospectives: Arc::new(RetrospectiveStorage::new(pool)),
            admin,
        }
    }
}
