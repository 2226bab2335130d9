//! HTTP client for the board data source.
//!
//! The endpoint is taken from configuration or from the `KANBAN_BOARD_URL`
//! environment variable (default: the public frontend-assignment feed).
//!
//! A fetch is a single GET with no retry. Any failure surfaces once as a
//! [`FetchError`] and the caller decides what to show.

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::{BoardPayload, Snapshot};

/// Default data source.
pub const DEFAULT_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Environment variable overriding the data source URL.
pub const URL_ENV: &str = "KANBAN_BOARD_URL";

/// Reasons a fetch can fail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch data: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch data: server returned {0}")]
    Status(StatusCode),

    #[error("Failed to fetch data: malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Client for the tickets-and-users endpoint.
#[derive(Debug, Clone)]
pub struct BoardClient {
    url: String,
    client: Client,
}

impl BoardClient {
    /// Create client from the environment, falling back to [`DEFAULT_URL`].
    pub fn from_env() -> Self {
        let url = std::env::var(URL_ENV).unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(url)
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch tickets and users and wrap them in a fresh [`Snapshot`].
    ///
    /// The body is parsed in full before anything is returned, so callers
    /// never see a partial snapshot.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        tracing::debug!(url = %self.url, "Fetching board data");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let payload: BoardPayload = serde_json::from_str(&body)?;
        let snapshot = Snapshot::from_payload(payload);

        tracing::info!(
            tasks = snapshot.tasks.len(),
            users = snapshot.users.len(),
            "Fetched board snapshot"
        );
        Ok(snapshot)
    }
}
