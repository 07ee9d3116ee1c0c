//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results
//!   or terminal resize.
//!
//! ## Fetches
//!
//! Each `Effect::Fetch` spawns one tokio task running the `FetchController`.
//! Its transitions come back over an mpsc channel as `Action::Stories`,
//! tagged with the fetch's generation. Spawning a new fetch aborts the one
//! still in flight, and `update` ignores anything from an older generation.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::FetchController;
use crate::core::persist::open_store;
use crate::core::state::App;
use crate::search::{AlgoliaClient, RequestUrl};
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchForm, SearchFormEvent, StoryListEvent, StoryListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which part of the screen receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the search term, Enter submits.
    Search,
    /// Up/Down move through stories, `d` removes. Typing jumps back to Search.
    List,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_form: SearchForm,
    pub story_list: StoryListState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new(search_term: &str) -> Self {
        Self {
            search_form: SearchForm::new(search_term),
            story_list: StoryListState::new(),
            focus: Focus::Search, // User expects to type immediately
        }
    }

    /// Push props from the core state into the components.
    fn sync(&mut self, app: &App) {
        self.search_form.input.set_value(app.search_term.get());
        self.search_form.input.is_focused = self.focus == Focus::Search;
        self.story_list.clamp(app.stories.data.len());
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Outcome of handling one terminal event.
enum Dispatch {
    Continue,
    Quit,
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store = open_store(config.storage_path.as_deref());
    let mut app = App::from_config(&config, store);
    let mut tui = TuiState::new(app.search_term.get());
    let controller = FetchController::new(Arc::new(AlgoliaClient::new()));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the fetch in flight, if any
    let mut active_fetch: Option<tokio::task::AbortHandle> = None;

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let effect = update(&mut app, Action::Mount);
    apply_effect(effect, &controller, &tx, &mut active_fetch);

    loop {
        tui.sync(&app);

        let animating = app.stories.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Dispatch::Quit =
                handle_event(&event, &mut app, &mut tui, &controller, &tx, &mut active_fetch)
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle fetch task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            apply_effect(effect, &controller, &tx, &mut active_fetch);
        }
    }

    if let Some(handle) = active_fetch.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

fn handle_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    controller: &FetchController,
    tx: &mpsc::Sender<Action>,
    active_fetch: &mut Option<tokio::task::AbortHandle>,
) -> Dispatch {
    let action = match event {
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => return Dispatch::Continue,
        TuiEvent::ForceQuit | TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.toggle();
            tui.search_form.input.is_focused = tui.focus == Focus::Search;
            None
        }
        _ => match tui.focus {
            Focus::Search => form_action(tui, event),
            Focus::List => match event {
                // Typing other than the remove key jumps back to the search box
                TuiEvent::InputChar(c) if *c != 'd' => {
                    tui.focus = Focus::Search;
                    form_action(tui, event)
                }
                TuiEvent::Paste(_) | TuiEvent::Backspace => {
                    tui.focus = Focus::Search;
                    form_action(tui, event)
                }
                _ => tui
                    .story_list
                    .handle_event(event, &app.stories.data)
                    .map(|list_event| match list_event {
                        StoryListEvent::Remove(story) => Action::RemoveStory(story),
                    }),
            },
        },
    };

    let Some(action) = action else {
        return Dispatch::Continue;
    };
    match update(app, action) {
        Effect::Quit => Dispatch::Quit,
        effect => {
            apply_effect(effect, controller, tx, active_fetch);
            Dispatch::Continue
        }
    }
}

/// Route an event through the search form and map what it emits to a core action.
fn form_action(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    tui.search_form.input.is_focused = tui.focus == Focus::Search;
    tui.search_form
        .handle_event(event)
        .map(|form_event| match form_event {
            SearchFormEvent::Input(text) => Action::SearchInput(text),
            SearchFormEvent::Submit => Action::SearchSubmit,
        })
}

fn apply_effect(
    effect: Effect,
    controller: &FetchController,
    tx: &mpsc::Sender<Action>,
    active_fetch: &mut Option<tokio::task::AbortHandle>,
) {
    if let Effect::Fetch { url, generation } = effect {
        if let Some(handle) = active_fetch.take() {
            debug!("Aborting superseded fetch");
            handle.abort();
        }
        *active_fetch = Some(spawn_fetch(controller, url, generation, tx.clone()));
    }
}

fn spawn_fetch(
    controller: &FetchController,
    url: RequestUrl,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning fetch {} for {}", generation, url);
    let controller = controller.clone();

    let handle = tokio::spawn(async move {
        controller
            .run(&url, |action| {
                if tx.send(Action::Stories { generation, action }).is_err() {
                    warn!("Failed to send fetch action: receiver dropped");
                }
            })
            .await;
    });

    handle.abort_handle()
}
