// ABOUTME: Fan-out/fan-in pipeline from repository listing to card-ready records
// ABOUTME: Listing failures are fatal; each repository summarizes independently

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info};

use folio_ai::TextGenerator;
use folio_core::{ProjectCard, DEFAULT_PORTFOLIO_MARKER};

use crate::cache::SummaryCache;
use crate::error::PipelineResult;
use crate::source::RepositorySource;
use crate::summarizer::ReadmeSummarizer;

pub struct PortfolioPipeline {
    source: Arc<dyn RepositorySource>,
    summarizer: ReadmeSummarizer,
    marker: String,
}

impl PortfolioPipeline {
    pub fn new(
        source: Arc<dyn RepositorySource>,
        generator: Arc<dyn TextGenerator>,
        cache: SummaryCache,
    ) -> Self {
        let summarizer = ReadmeSummarizer::new(source.clone(), generator, cache);
        Self {
            source,
            summarizer,
            marker: DEFAULT_PORTFOLIO_MARKER.to_string(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn cache(&self) -> &SummaryCache {
        self.summarizer.cache()
    }

    /// List marked repositories and summarize all of them concurrently.
    ///
    /// Every summarization is awaited, with no cap on concurrency and no
    /// cancellation when one fails. Cards come back in listing order, with
    /// failed repositories omitted. The fan-out is unbounded, which only
    /// holds up for a personal account's repository count.
    pub async fn fetch_projects(&self) -> PipelineResult<Vec<ProjectCard>> {
        let repos = self
            .source
            .list_portfolio_repositories(&self.marker)
            .await
            .inspect_err(|e| error!("Repository listing failed: {}", e))?;

        let results = join_all(
            repos
                .iter()
                .map(|repo| self.summarizer.summarize_repository(repo)),
        )
        .await;

        let cards: Vec<ProjectCard> = results.into_iter().flatten().collect();
        info!(
            "Built {} project cards from {} repositories",
            cards.len(),
            repos.len()
        );
        Ok(cards)
    }
}
