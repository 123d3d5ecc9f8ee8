//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// The portfolio repositories summarized when GITHUB_REPO_URLS is unset.
const DEFAULT_REPO_URLS: [&str; 5] = [
    "https://github.com/utfunderscore/matchmaker-rs",
    "https://github.com/utfunderscore/ui-toolkit",
    "https://github.com/utfunderscore/hermes",
    "https://github.com/utfunderscore/loadbalancer-rs",
    "https://github.com/utfunderscore/game",
];

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in minutes for cached GitHub responses
    pub cache_ttl_minutes: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Optional bearer token for outbound GitHub requests
    pub github_token: Option<String>,
    /// GitHub repository URLs to summarize
    pub repo_urls: Vec<String>,
    /// Path to the blog posts JSON file
    pub posts_path: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MINUTES` - Default cache TTL in minutes (default: 30)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 300)
    /// - `GITHUB_TOKEN` - Optional GitHub bearer token
    /// - `GITHUB_REPO_URLS` - Comma-separated repository URLs
    /// - `POSTS_PATH` - Blog posts JSON file (default: public/posts.json)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_minutes: env::var("CACHE_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            repo_urls: env::var("GITHUB_REPO_URLS")
                .ok()
                .map(|v| parse_repo_urls(&v))
                .filter(|urls| !urls.is_empty())
                .unwrap_or_else(default_repo_urls),
            posts_path: env::var("POSTS_PATH").unwrap_or_else(|_| "public/posts.json".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_minutes: 30,
            server_port: 3000,
            cleanup_interval: 300,
            github_token: None,
            repo_urls: default_repo_urls(),
            posts_path: "public/posts.json".to_string(),
        }
    }
}

fn default_repo_urls() -> Vec<String> {
    DEFAULT_REPO_URLS.iter().map(|url| url.to_string()).collect()
}

/// Splits a comma-separated URL list, dropping blank segments.
fn parse_repo_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}
