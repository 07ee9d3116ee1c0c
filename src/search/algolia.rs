//! Hacker News search over the Algolia HTTP API.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::client::{SearchClient, SearchError};
use super::types::{RequestUrl, SearchResponse, Story};

pub struct AlgoliaClient {
    client: reqwest::Client,
}

impl AlgoliaClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Sends the GET and returns the response if it has a success status.
    async fn send_request(&self, url: &RequestUrl) -> Result<reqwest::Response, SearchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        debug!("Search response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Search API error: {} - {}", status, err_body);
            return Err(SearchError::Api {
                status,
                message: err_body,
            });
        }

        Ok(response)
    }
}

impl Default for AlgoliaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    fn name(&self) -> &str {
        "algolia"
    }

    async fn search(&self, url: &RequestUrl) -> Result<Vec<Story>, SearchError> {
        info!("Search request: GET {}", url);

        let response = self.send_request(url).await?;

        // Read as text first so a decode failure is a Parse error, not a Network one.
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        info!("Search returned {} hits", parsed.hits.len());
        Ok(parsed.hits)
    }
}
