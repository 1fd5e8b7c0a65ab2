//! Blocking HTTP client scoped to a single repository.

use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::Credentials;

// Timeouts keep a stalled API call from hanging the whole run.
pub(crate) const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub(crate) const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Authenticated client for `{org}/{repo}` endpoints.
pub struct GithubClient {
    http: Client,
    base_url: String,
    token: String,
    org: String,
    repo: String,
}

impl GithubClient {
    /// Create a client for the given repository under the credential org.
    pub fn new(credentials: &Credentials, repo: &str) -> Result<Self> {
        Self::with_base_url(credentials, repo, GITHUB_API_BASE)
    }

    /// Create a client against a custom API base URL. Tests use this to
    /// point the client at a local mock server.
    pub fn with_base_url(credentials: &Credentials, repo: &str, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent("vouch")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: credentials.token.clone(),
            org: credentials.org.clone(),
            repo: repo.to_string(),
        })
    }

    /// The `org/repo` slug this client is scoped to.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }

    /// Issue an authenticated GET against `repos/{org}/{repo}/{endpoint}`.
    ///
    /// Returns the parsed JSON payload on HTTP 200. A 404, any other
    /// status, a transport error, or an unparseable body is logged to
    /// stderr and yields `None`.
    pub fn fetch_json(&self, endpoint: &str) -> Option<serde_json::Value> {
        let url = format!(
            "{}/repos/{}/{}/{}",
            self.base_url, self.org, self.repo, endpoint
        );

        let response = match self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                eprintln!("  {} {endpoint}: request failed: {e}", "✗".red());
                return None;
            }
        };

        match response.status() {
            StatusCode::OK => match response.json() {
                Ok(payload) => Some(payload),
                Err(e) => {
                    eprintln!("  {} {endpoint}: invalid JSON response: {e}", "✗".red());
                    None
                }
            },
            StatusCode::NOT_FOUND => {
                eprintln!("  {} {endpoint}: not found (404)", "✗".red());
                None
            }
            status => {
                eprintln!("  {} {endpoint}: HTTP {}", "✗".red(), status.as_u16());
                None
            }
        }
    }
}
