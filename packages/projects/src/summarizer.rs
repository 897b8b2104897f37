// ABOUTME: Per-repository README summarization with cache short-circuit
// ABOUTME: Missing READMEs use a placeholder, unparseable replies degrade, call failures drop the repo

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use folio_ai::{build_summary_prompt, parse_summary_reply, AIServiceResult, TextGenerator};
use folio_core::{ProjectCard, ReadmeSummary, RepositoryDescriptor, README_NOT_FOUND};

use crate::cache::SummaryCache;
use crate::source::RepositorySource;

pub struct ReadmeSummarizer {
    source: Arc<dyn RepositorySource>,
    generator: Arc<dyn TextGenerator>,
    cache: SummaryCache,
}

impl ReadmeSummarizer {
    pub fn new(
        source: Arc<dyn RepositorySource>,
        generator: Arc<dyn TextGenerator>,
        cache: SummaryCache,
    ) -> Self {
        Self {
            source,
            generator,
            cache,
        }
    }

    pub fn cache(&self) -> &SummaryCache {
        &self.cache
    }

    /// Summarize one README through the generation service.
    ///
    /// Only the call itself can fail; a reply that does not match the expected
    /// shape becomes the degraded summary.
    pub async fn summarize_readme(&self, readme: &str) -> AIServiceResult<ReadmeSummary> {
        let raw = self.generator.complete(build_summary_prompt(readme)).await?;
        Ok(parse_summary_reply(&raw).into_summary())
    }

    /// Produce the card for `repo`, or `None` if this repository failed.
    ///
    /// A cached card is returned without touching GitHub or the generation
    /// service.
    pub async fn summarize_repository(&self, repo: &RepositoryDescriptor) -> Option<ProjectCard> {
        if let Some(cached) = self.cache.get(&repo.full_name).await {
            debug!("Summary cache hit for {}", repo.full_name);
            return Some(cached);
        }

        let readme = match self.source.fetch_readme(&repo.full_name).await {
            Some(readme) => readme,
            None => {
                warn!("Using placeholder README for {}", repo.full_name);
                README_NOT_FOUND.to_string()
            }
        };

        let summary = match self.summarize_readme(&readme).await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Error processing repo {}: {}", repo.name, e);
                return None;
            }
        };

        if summary.is_degraded() {
            warn!("Caching degraded summary for {}", repo.full_name);
        } else {
            info!("Summarized {}", repo.full_name);
        }

        let card = ProjectCard::from_summary(repo, summary);
        self.cache.insert(repo.full_name.clone(), card.clone()).await;
        Some(card)
    }
}
