//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User edits the search box? That's `Action::SearchInput(text)`.
//! A fetch resolves? That's `Action::Stories { generation, action }`.
//!
//! The stories state machine itself is `stories_reducer`: a pure function
//! from the previous `StoriesState` and a `StoriesAction` to the next state.
//! `update()` wraps it with the app-level bookkeeping and returns an
//! `Effect` for the adapter to carry out. No I/O happens here apart from the
//! persisted search term's best-effort write.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{App, StoriesState};
use crate::search::{RequestUrl, Story};

/// Transitions of the stories state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A fetch started.
    FetchInit,
    /// A fetch resolved with these hits.
    FetchSuccess(Vec<Story>),
    /// A fetch failed, for any reason.
    FetchFailure,
    /// The user dismissed this story.
    RemoveStory(Story),
}

/// Computes the next stories state. Every arm builds a whole new state.
pub fn stories_reducer(state: &StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            data: state.data.clone(),
            is_loading: true,
            is_error: false,
        },
        StoriesAction::FetchSuccess(payload) => StoriesState {
            data: payload,
            is_loading: false,
            is_error: false,
        },
        StoriesAction::FetchFailure => StoriesState {
            data: state.data.clone(),
            is_loading: false,
            is_error: true,
        },
        StoriesAction::RemoveStory(item) => StoriesState {
            data: state
                .data
                .iter()
                .filter(|story| story.object_id != item.object_id)
                .cloned()
                .collect(),
            is_loading: state.is_loading,
            is_error: state.is_error,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The UI came up; fetch the initial RequestUrl.
    Mount,
    /// The draft term changed.
    SearchInput(String),
    /// The search form was submitted.
    SearchSubmit,
    /// Outcome of the fetch identified by `generation`.
    Stories {
        generation: u64,
        action: StoriesAction,
    },
    RemoveStory(Story),
    Quit,
}

/// Side effects `update` asks the adapter to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Fetch { url: RequestUrl, generation: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => begin_fetch(app),
        Action::SearchInput(text) => {
            app.search_term.set(text);
            Effect::None
        }
        Action::SearchSubmit => {
            // Submit is disabled while the draft is empty
            if app.search_term.get().is_empty() {
                return Effect::None;
            }
            let url = RequestUrl::compose(&app.endpoint, app.search_term.get());
            if url == app.request_url {
                debug!("RequestUrl unchanged, not refetching: {}", url);
                return Effect::None;
            }
            info!("Committing search: {}", url);
            app.request_url = url;
            app.committed_term = app.search_term.get().to_string();
            begin_fetch(app)
        }
        Action::Stories { generation, action } => {
            if generation != app.fetch_generation {
                debug!(
                    "Dropping outcome of superseded fetch {} (latest {})",
                    generation, app.fetch_generation
                );
                return Effect::None;
            }
            app.stories = stories_reducer(&app.stories, action);
            Effect::None
        }
        Action::RemoveStory(item) => {
            debug!("Removing story {}", item.object_id);
            app.stories = stories_reducer(&app.stories, StoriesAction::RemoveStory(item));
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn begin_fetch(app: &mut App) -> Effect {
    app.fetch_generation += 1;
    Effect::Fetch {
        url: app.request_url.clone(),
        generation: app.fetch_generation,
    }
}
