// ABOUTME: Process-lifetime cache of project cards keyed by repository identity
// ABOUTME: Explicit object shared by cloning; entries never expire, clear() resets

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use folio_core::ProjectCard;

/// Summary cache keyed by repository `full_name`.
///
/// Clones share the same entries. There is no TTL or eviction: a cached card
/// is served until [`SummaryCache::clear`] is called or the process exits,
/// even if the README has changed since.
#[derive(Debug, Clone, Default)]
pub struct SummaryCache {
    entries: Arc<RwLock<HashMap<String, ProjectCard>>>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, full_name: &str) -> Option<ProjectCard> {
        self.entries.read().await.get(full_name).cloned()
    }

    pub async fn insert(&self, full_name: impl Into<String>, card: ProjectCard) {
        self.entries.write().await.insert(full_name.into(), card);
    }

    pub async fn contains(&self, full_name: &str) -> bool {
        self.entries.read().await.contains_key(full_name)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> ProjectCard {
        ProjectCard {
            project_id: format!("octo/{}", name),
            name: name.to_string(),
            summary: "s".to_string(),
            technologies: vec![],
            deployed_url: None,
            github_url: format!("https://github.com/octo/{}", name),
        }
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = SummaryCache::new();
        let other = cache.clone();

        cache.insert("octo/a", card("a")).await;

        assert_eq!(other.get("octo/a").await, Some(card("a")));
        assert_eq!(other.len().await, 1);
    }

    #[tokio::test]
    async fn test_clear_resets() {
        let cache = SummaryCache::new();
        cache.insert("octo/a", card("a")).await;

        cache.clear().await;

        assert!(cache.is_empty().await);
        assert!(!cache.contains("octo/a").await);
    }
}
