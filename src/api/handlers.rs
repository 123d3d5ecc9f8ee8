//! API Handlers
//!
//! HTTP request handlers for each portfolio API endpoint.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::Result;
use crate::github::{projects_cache_key, GitHubClient};
use crate::models::{ClearResponse, HealthResponse, Post, ProjectSummary, StatsResponse};
use crate::posts::load_posts;

/// Application state shared across all handlers.
///
/// The cache is constructed once at startup and handed to whatever needs
/// it; handlers clone the (cheap) handle.
#[derive(Clone)]
pub struct AppState {
    /// Response cache for GitHub project lookups
    pub cache: SharedCache<Vec<ProjectSummary>>,
    /// Outbound GitHub client
    pub github: GitHubClient,
    /// Repositories summarized by the projects endpoint
    pub repo_urls: Arc<Vec<String>>,
    /// Blog posts JSON file
    pub posts_path: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: SharedCache<Vec<ProjectSummary>>,
        github: GitHubClient,
        repo_urls: Vec<String>,
        posts_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cache,
            github,
            repo_urls: Arc::new(repo_urls),
            posts_path: Arc::new(posts_path.into()),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = SharedCache::new(Duration::from_secs(config.cache_ttl_minutes * 60));
        let github = GitHubClient::new(config.github_token.as_deref())?;

        Ok(Self::new(
            cache,
            github,
            config.repo_urls.clone(),
            config.posts_path.clone(),
        ))
    }
}

/// Handler for GET /api/projects
///
/// Serves the cached project summaries, fetching from GitHub on a cache
/// miss. A lookup failure is surfaced to the client and never cached, so
/// the next request retries.
pub async fn projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectSummary>>> {
    let key = projects_cache_key(&state.repo_urls);
    let github = state.github.clone();
    let repo_urls = Arc::clone(&state.repo_urls);

    let projects = state
        .cache
        .get_or_set(
            &key,
            || async move { github.fetch_projects(&repo_urls).await },
            None,
        )
        .await?;

    Ok(Json(projects))
}

/// Handler for GET /api/posts
///
/// Always succeeds; a missing or unreadable posts file yields an empty
/// list.
pub async fn posts_handler(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(load_posts(state.posts_path.as_path()))
}

/// Handler for GET /cache/stats
///
/// Returns current cache statistics for observability and debugging.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::from(stats))
}

/// Handler for DELETE /cache
///
/// Empties the response cache; the next projects request refetches.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let size = state.cache.stats().await.size;
    state.cache.clear().await;

    Json(ClearResponse::new(size))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(
            SharedCache::new(Duration::from_secs(300)),
            GitHubClient::new(None).unwrap(),
            vec!["https://github.com/utfunderscore/hermes".to_string()],
            "does/not/exist/posts.json",
        )
    }

    #[tokio::test]
    async fn test_stats_handler_empty_cache() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.size, 0);
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_stats_handler_reflects_cache_contents() {
        let state = test_state();
        state
            .cache
            .set("projects", Vec::new(), None)
            .await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.size, 1);
        assert_eq!(response.keys, vec!["projects".to_string()]);
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let state = test_state();
        state.cache.set("projects", Vec::new(), None).await;

        let response = clear_cache_handler(State(state.clone())).await;
        assert_eq!(response.entries_removed, 1);
        assert_eq!(state.cache.stats().await.size, 0);
    }

    #[tokio::test]
    async fn test_posts_handler_missing_file() {
        let response = posts_handler(State(test_state())).await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
