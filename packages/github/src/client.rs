// ABOUTME: GitHub REST client used by the portfolio pipeline
// ABOUTME: Single best-effort request per call, no retries and no pagination

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::{debug, error, info, warn};

use folio_core::RepositoryDescriptor;

use crate::error::{GitHubError, Result};

/// REST API version pinned on every request
pub const GITHUB_API_VERSION: &str = "2022-11-28";

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const RAW_CONTENT_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";
const CLIENT_USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the GitHub client
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL without trailing slash, e.g. `https://api.github.com`
    pub api_url: String,
    pub token: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl GitHubConfig {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(CLIENT_USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    /// List every repository visible to the authenticated account.
    ///
    /// Any non-success status aborts with [`GitHubError::Upstream`]; a body
    /// that is not an array of repository objects yields
    /// [`GitHubError::MalformedResponse`].
    pub async fn list_repositories(&self) -> Result<Vec<RepositoryDescriptor>> {
        let url = format!("{}/user/repos", self.api_url);
        debug!("Listing repositories: {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(API_VERSION_HEADER, GITHUB_API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("GitHub API error: {} - {}", status.as_u16(), body);
            return Err(GitHubError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| GitHubError::MalformedResponse(format!("Invalid JSON: {}", e)))?;

        if !value.is_array() {
            return Err(GitHubError::MalformedResponse(
                "Expected an array of repositories from GitHub.".to_string(),
            ));
        }

        let repos: Vec<RepositoryDescriptor> = serde_json::from_value(value).map_err(|e| {
            GitHubError::MalformedResponse(format!("Unexpected repository object: {}", e))
        })?;

        info!("GitHub returned {} repositories", repos.len());
        Ok(repos)
    }

    /// List repositories whose description contains `marker`
    pub async fn list_portfolio_repositories(
        &self,
        marker: &str,
    ) -> Result<Vec<RepositoryDescriptor>> {
        let repos = self.list_repositories().await?;
        let filtered = filter_by_marker(repos, marker);
        info!(
            "{} repositories carry the portfolio marker {:?}",
            filtered.len(),
            marker
        );
        Ok(filtered)
    }

    /// Fetch the raw README text of `full_name`.
    ///
    /// A missing README, a non-200 status or a transport failure all return
    /// `None`; callers substitute their own placeholder.
    pub async fn fetch_readme(&self, full_name: &str) -> Option<String> {
        let url = format!("{}/repos/{}/readme", self.api_url, full_name);

        let response = match self
            .client
            .get(&url)
            .header(ACCEPT, RAW_CONTENT_MEDIA_TYPE)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(API_VERSION_HEADER, GITHUB_API_VERSION)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("README request for {} failed: {}", full_name, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "README for {} not available: status {}",
                full_name,
                response.status()
            );
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Failed to read README body for {}: {}", full_name, e);
                None
            }
        }
    }
}

/// Keep repositories whose description contains `marker`, preserving order
pub fn filter_by_marker(
    repos: Vec<RepositoryDescriptor>,
    marker: &str,
) -> Vec<RepositoryDescriptor> {
    repos
        .into_iter()
        .filter(|repo| repo.has_marker(marker))
        .collect()
}
