// ABOUTME: Error types for GitHub API access
// ABOUTME: Distinguishes non-success responses from unexpected response shapes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    /// Non-success status from the API; carries the body for diagnostics
    #[error("GitHub API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed GitHub response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl GitHubError {
    /// Status code of an upstream failure, if there was a response at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
