// GitHub API HTTP client.
// Handles default headers and optional bearer authentication.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, Response,
};

use crate::error::{ApiError, Result};

pub(crate) const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = "connor-portfolio";

/// GitHub API client.
///
/// Requests go out unauthenticated unless a token is supplied, in which
/// case a bearer Authorization header is attached to every call.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client, optionally authenticated.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::Internal(e.to_string()))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }

    /// Make a GET request to an absolute URL.
    pub(crate) async fn get(&self, url: &str) -> Result<Response> {
        Ok(self.client.get(url).send().await?)
    }
}
