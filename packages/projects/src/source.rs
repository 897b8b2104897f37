// ABOUTME: Repository source abstraction consumed by the pipeline
// ABOUTME: Implemented by the GitHub client; stubs stand in for it in tests

use async_trait::async_trait;

use folio_core::RepositoryDescriptor;
use folio_github::{GitHubClient, Result};

#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Repositories whose description contains `marker`; fails as a whole
    async fn list_portfolio_repositories(&self, marker: &str)
        -> Result<Vec<RepositoryDescriptor>>;

    /// Raw README text, or `None` when it cannot be fetched
    async fn fetch_readme(&self, full_name: &str) -> Option<String>;
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_portfolio_repositories(
        &self,
        marker: &str,
    ) -> Result<Vec<RepositoryDescriptor>> {
        GitHubClient::list_portfolio_repositories(self, marker).await
    }

    async fn fetch_readme(&self, full_name: &str) -> Option<String> {
        GitHubClient::fetch_readme(self, full_name).await
    }
}
