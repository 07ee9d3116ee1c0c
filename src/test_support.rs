//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Mutex;

use crate::core::persist::{MemoryStore, PersistedValue};
use crate::core::state::{App, SEARCH_TERM_KEY};
use crate::search::{RequestUrl, SearchClient, SearchError, Story};

pub const TEST_ENDPOINT: &str = "http://stub.test/search?query=";

/// A story with the given id and filler fields.
pub fn story(id: &str) -> Story {
    Story {
        object_id: id.to_string(),
        title: format!("Story {id}"),
        url: format!("https://example.com/{id}"),
        author: "author".to_string(),
        num_comments: 3,
        points: 10,
    }
}

/// A search client that answers from memory and records what it was asked.
pub struct StubClient {
    result: Option<Vec<Story>>,
    requested: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn hits(stories: Vec<Story>) -> Self {
        Self {
            result: Some(stories),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchClient for StubClient {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search(&self, url: &RequestUrl) -> Result<Vec<Story>, SearchError> {
        self.requested.lock().unwrap().push(url.as_str().to_string());
        self.result.clone().ok_or_else(|| SearchError::Api {
            status: 500,
            message: "stub failure".to_string(),
        })
    }
}

/// Creates a test App with default term "React" over an empty in-memory store.
pub fn test_app() -> App {
    test_app_with_store(MemoryStore::new())
}

pub fn test_app_with_store(store: MemoryStore) -> App {
    let term = PersistedValue::restore(Box::new(store), SEARCH_TERM_KEY, "React").enable_writes();
    App::new(TEST_ENDPOINT.to_string(), term)
}
