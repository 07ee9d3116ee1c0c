use std::fmt;

use async_trait::async_trait;

use super::types::{RequestUrl, Story};

/// Errors that can occur while fetching search results.
///
/// The UI folds every variant into the same "something went wrong" state;
/// the variants exist so the log says what actually happened.
#[derive(Debug)]
pub enum SearchError {
    /// Network-level failure (DNS, connection refused, bad URL).
    Network(String),
    /// The API answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body wasn't a `{ "hits": [...] }` object.
    Parse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SearchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// Performs one GET against `url` and returns the hits in API order.
    async fn search(&self, url: &RequestUrl) -> Result<Vec<Story>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            SearchError::Api {
                status: 503,
                message: "busy".into()
            }
            .to_string(),
            "API error (HTTP 503): busy"
        );
        assert_eq!(
            SearchError::Parse("missing field `hits`".into()).to_string(),
            "parse error: missing field `hits`"
        );
    }
}
