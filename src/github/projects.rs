// Project summarization.
// Fetches repository metadata and language breakdowns, degrading to
// placeholder summaries when individual repositories cannot be loaded.

use std::collections::HashMap;

use reqwest::{StatusCode, Url};
use tokio::task::JoinSet;
use tracing::warn;

use crate::cache::{build_key, hash_key, KeyPart};
use crate::error::{ApiError, Result};
use crate::github::client::{GitHubClient, GITHUB_API_BASE};
use crate::models::{GitHubRepoResponse, ProjectSummary};

const UNAVAILABLE_DESCRIPTION: &str = "Repository details are currently unavailable.";
const PRIVATE_OR_MISSING_DESCRIPTION: &str = "Repository is private or does not exist.";
const NO_DESCRIPTION: &str = "No description provided yet.";

/// Extract `(owner, repo)` from a GitHub repository URL.
///
/// A URL with fewer than two path segments is a configuration defect and
/// fails the call rather than degrading to a fallback.
pub fn parse_repository_slug(url: &str) -> Result<(String, String)> {
    let parsed = Url::parse(url).map_err(|_| ApiError::InvalidRepoUrl(url.to_string()))?;

    let mut segments = parsed
        .path_segments()
        .ok_or_else(|| ApiError::InvalidRepoUrl(url.to_string()))?
        .filter(|segment| !segment.is_empty());

    let owner = segments
        .next()
        .ok_or_else(|| ApiError::InvalidRepoUrl(url.to_string()))?;
    let repo = segments
        .next()
        .ok_or_else(|| ApiError::InvalidRepoUrl(url.to_string()))?;

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    Ok((owner.to_string(), repo.to_string()))
}

/// Placeholder summary for a repository that could not be fetched.
pub fn fallback_project(url: &str, repo: &str, description: Option<&str>) -> ProjectSummary {
    ProjectSummary {
        name: repo.to_string(),
        description: description.unwrap_or(UNAVAILABLE_DESCRIPTION).to_string(),
        stars: 0,
        topics: Vec::new(),
        languages: Vec::new(),
        url: url.to_string(),
    }
}

/// Cache key for a set of repository URLs.
///
/// The URLs are sorted first so the key is independent of configuration
/// order, then the joined key is compressed to digest width.
pub fn projects_cache_key(repo_urls: &[String]) -> String {
    let mut sorted: Vec<&str> = repo_urls.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut parts: Vec<KeyPart> = vec!["github-projects".into()];
    parts.extend(sorted.into_iter().map(KeyPart::from));

    hash_key(&build_key(&parts))
}

/// Map a raw repository payload to the summary the frontend renders.
fn summarize(
    data: GitHubRepoResponse,
    url: &str,
    repo: &str,
    languages: Vec<String>,
) -> ProjectSummary {
    ProjectSummary {
        name: data.name.unwrap_or_else(|| repo.to_string()),
        description: data.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        stars: data.stargazers_count.unwrap_or(0),
        topics: data.topics,
        languages,
        url: data.html_url.unwrap_or_else(|| url.to_string()),
    }
}

/// Order a language byte breakdown by bytes of code descending.
fn sort_languages(breakdown: HashMap<String, u64>) -> Vec<String> {
    let mut entries: Vec<(String, u64)> = breakdown.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.into_iter().map(|(language, _)| language).collect()
}

impl GitHubClient {
    /// Summarize every configured repository, sorted by stars descending.
    ///
    /// Repositories are fetched concurrently. A repository that cannot be
    /// loaded yields a placeholder summary instead of failing the set; only
    /// an unparseable URL fails the whole call.
    pub async fn fetch_projects(&self, repo_urls: &[String]) -> Result<Vec<ProjectSummary>> {
        let mut set = JoinSet::new();
        for url in repo_urls {
            let client = self.clone();
            let url = url.clone();
            set.spawn(async move { client.fetch_project(&url).await });
        }

        let mut projects = Vec::with_capacity(repo_urls.len());
        while let Some(joined) = set.join_next().await {
            let project = joined.map_err(|e| ApiError::Internal(e.to_string()))??;
            projects.push(project);
        }

        projects.sort_by(|a, b| b.stars.cmp(&a.stars));
        Ok(projects)
    }

    /// Summarize a single repository, degrading to a fallback on upstream
    /// failure.
    async fn fetch_project(&self, url: &str) -> Result<ProjectSummary> {
        let (owner, repo) = parse_repository_slug(url)?;

        match self.fetch_repo(&owner, &repo).await {
            Ok(data) => {
                let mut languages = match data.languages_url.as_deref() {
                    Some(languages_url) => self.fetch_languages(&owner, &repo, languages_url).await,
                    None => Vec::new(),
                };

                if languages.is_empty() {
                    if let Some(language) = &data.language {
                        languages = vec![language.clone()];
                    }
                }

                Ok(summarize(data, url, &repo, languages))
            }
            Err(ApiError::UpstreamStatus(404)) => Ok(fallback_project(
                url,
                &repo,
                Some(PRIVATE_OR_MISSING_DESCRIPTION),
            )),
            Err(error) => {
                warn!("Failed to load repository {}/{}: {}", owner, repo, error);
                Ok(fallback_project(url, &repo, None))
            }
        }
    }

    /// Fetch the raw repository payload.
    async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<GitHubRepoResponse> {
        let endpoint = format!("{}/repos/{}/{}", GITHUB_API_BASE, owner, repo);
        let response = self.get(&endpoint).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::UpstreamStatus(404));
        }
        if !response.status().is_success() {
            return Err(ApiError::UpstreamStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Fetch the language byte breakdown, ordered by share of the codebase.
    ///
    /// Language data is decoration: any failure logs a warning and returns
    /// an empty list so the caller falls back to the primary language.
    async fn fetch_languages(&self, owner: &str, repo: &str, languages_url: &str) -> Vec<String> {
        let response = match self.get(languages_url).await {
            Ok(response) if response.status().is_success() => response,
            Ok(_) | Err(_) => {
                warn!("Failed to load languages for {}/{}", owner, repo);
                return Vec::new();
            }
        };

        match response.json::<HashMap<String, u64>>().await {
            Ok(breakdown) => sort_languages(breakdown),
            Err(error) => {
                warn!("Failed to parse languages for {}/{}: {}", owner, repo, error);
                Vec::new()
            }
        }
    }
}
