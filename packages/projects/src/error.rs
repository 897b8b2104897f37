// ABOUTME: Pipeline error type for failures that abort a whole run
// ABOUTME: Wraps the repository listing error and flags upstream failures

use thiserror::Error;

use folio_github::GitHubError;

/// Failures that abort a whole pipeline run.
///
/// Per-repository failures never surface here; they drop that repository
/// from the result instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Listing(#[from] GitHubError),
}

impl PipelineError {
    pub fn is_upstream(&self) -> bool {
        matches!(self, PipelineError::Listing(GitHubError::Upstream { .. }))
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
