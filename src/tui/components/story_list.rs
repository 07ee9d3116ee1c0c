//! # StoryList Component
//!
//! Scrollable list of the fetched stories with a selection cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StoryListState` lives in `TuiState`
//! - `StoryList` is created each frame with borrowed state and the stories as props
//!
//! Up/Down move the selection. Delete or `d` asks for the selected story to
//! be removed; the list itself never mutates the data.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, List, ListState, Paragraph};

use crate::search::Story;
use crate::tui::components::story_item::StoryItem;
use crate::tui::event::TuiEvent;

/// Rows skipped by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Events emitted by the story list.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryListEvent {
    /// Remove this story (the full item).
    Remove(Story),
}

/// Persistent state for the story list.
pub struct StoryListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for StoryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Handle a key event against the current stories.
    pub fn handle_event(&mut self, event: &TuiEvent, stories: &[Story]) -> Option<StoryListEvent> {
        if stories.is_empty() {
            return None;
        }
        let last = stories.len() - 1;

        match event {
            TuiEvent::CursorUp => self.select(self.selected.saturating_sub(1)),
            TuiEvent::CursorDown => self.select((self.selected + 1).min(last)),
            TuiEvent::PageUp => self.select(self.selected.saturating_sub(PAGE_SIZE)),
            TuiEvent::PageDown => self.select((self.selected + PAGE_SIZE).min(last)),
            TuiEvent::CursorHome => self.select(0),
            TuiEvent::CursorEnd => self.select(last),
            TuiEvent::Delete | TuiEvent::InputChar('d') => {
                return stories
                    .get(self.selected)
                    .cloned()
                    .map(StoryListEvent::Remove);
            }
            _ => {}
        }
        None
    }

    /// Keep the selection inside a list of `len` stories (after removals or a new fetch).
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.select(self.selected.min(len - 1));
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

/// Transient render wrapper for the story list.
pub struct StoryList<'a> {
    stories: &'a [Story],
    state: &'a mut StoryListState,
    focused: bool,
}

impl<'a> StoryList<'a> {
    pub fn new(stories: &'a [Story], state: &'a mut StoryListState, focused: bool) -> Self {
        Self {
            stories,
            state,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Stories ({}) ", self.stories.len()));

        if self.stories.is_empty() {
            let empty = Paragraph::new("No stories.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        frame.render_widget(StoryItem::header(inner.width), header_area);

        let items: Vec<_> = self
            .stories
            .iter()
            .map(|story| StoryItem::new(story).to_list_item(list_area.width))
            .collect();

        // Selection is only highlighted while the list has focus
        let highlight = if self.focused {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);

        self.state.clamp(self.stories.len());
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
