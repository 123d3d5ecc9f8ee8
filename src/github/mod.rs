// GitHub integration: outbound API client and project summarization.
// The cache layer treats this module as an opaque asynchronous data source.

mod client;
mod projects;

pub use client::GitHubClient;
pub use projects::{fallback_project, parse_repository_slug, projects_cache_key};
