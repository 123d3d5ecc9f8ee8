//! Project models
//!
//! The summarized project shape served to the frontend and the raw GitHub
//! repository payload it is derived from.

use serde::{Deserialize, Serialize};

/// A GitHub repository condensed to what the projects panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Repository name
    pub name: String,
    /// Repository description
    pub description: String,
    /// Stargazer count
    pub stars: u64,
    /// Repository topics
    pub topics: Vec<String>,
    /// Languages, ordered by bytes of code descending
    pub languages: Vec<String>,
    /// Link to the repository
    pub url: String,
}

/// Raw repository payload from `GET /repos/{owner}/{repo}`.
///
/// Only the fields the summary needs; everything else in the GitHub
/// response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepoResponse {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stargazers_count: Option<u64>,
    pub html_url: Option<String>,
    pub language: Option<String>,
    pub languages_url: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}
