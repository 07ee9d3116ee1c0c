//! # Fetch Controller
//!
//! Issues one search per committed `RequestUrl` and reports the stories
//! state machine transitions it causes:
//!
//! ```text
//! FetchInit ──► client.search(url) ──┬─► FetchSuccess(hits)
//!                                    └─► FetchFailure
//! ```
//!
//! Failure kinds are logged but not surfaced; the state machine only learns
//! that the fetch failed. No retries and no timeout. Superseded requests are
//! handled by the caller (abort + generation check in `update`).

use log::{info, warn};
use std::sync::Arc;

use crate::core::action::StoriesAction;
use crate::search::{RequestUrl, SearchClient};

#[derive(Clone)]
pub struct FetchController {
    client: Arc<dyn SearchClient>,
}

impl FetchController {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }

    /// Runs one fetch for `url`, passing every transition to `dispatch`.
    pub async fn run<F>(&self, url: &RequestUrl, mut dispatch: F)
    where
        F: FnMut(StoriesAction),
    {
        dispatch(StoriesAction::FetchInit);

        match self.client.search(url).await {
            Ok(hits) => {
                info!("Fetch via {} succeeded: {} stories", self.client.name(), hits.len());
                dispatch(StoriesAction::FetchSuccess(hits));
            }
            Err(e) => {
                warn!("Fetch via {} failed for {}: {}", self.client.name(), url, e);
                dispatch(StoriesAction::FetchFailure);
            }
        }
    }
}
