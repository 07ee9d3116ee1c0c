//! # Application State
//!
//! Core business state. No TUI-specific types live here; presentation state
//! (focus, selection, the text cursor) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── stories: StoriesState          // fetched results + loading/error flags
//! │   ├── data: Vec<Story>
//! │   ├── is_loading: bool
//! │   └── is_error: bool
//! ├── search_term: PersistedValue    // draft term, mirrored to the store
//! ├── request_url: RequestUrl        // committed endpoint + term
//! ├── committed_term: String         // term behind request_url
//! ├── endpoint: String               // injected search endpoint
//! └── fetch_generation: u64          // id of the latest fetch
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::persist::{KeyValueStore, PersistedValue};
use crate::search::{RequestUrl, Story};

/// Storage key the search term is persisted under.
pub const SEARCH_TERM_KEY: &str = "search";

/// The stories state machine's state. Replaced wholesale on every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

pub struct App {
    pub stories: StoriesState,
    pub search_term: PersistedValue,
    pub request_url: RequestUrl,
    /// The term `request_url` was built from. Lags the draft until submit.
    pub committed_term: String,
    pub endpoint: String,
    /// Incremented for every fetch. Outcomes tagged with an older number are dropped.
    pub fetch_generation: u64,
}

impl App {
    pub fn new(endpoint: String, search_term: PersistedValue) -> Self {
        let committed_term = search_term.get().to_string();
        let request_url = RequestUrl::compose(&endpoint, &committed_term);
        Self {
            stories: StoriesState::default(),
            search_term,
            request_url,
            committed_term,
            endpoint,
            fetch_generation: 0,
        }
    }

    /// Restores the search term from `store` and builds the app around it.
    pub fn from_config(config: &ResolvedConfig, store: Box<dyn KeyValueStore>) -> Self {
        let search_term =
            PersistedValue::restore(store, SEARCH_TERM_KEY, &config.default_query).enable_writes();
        Self::new(config.endpoint.clone(), search_term)
    }
}
