//! # SearchForm Component
//!
//! Label, text input and submit control in one bordered row:
//!
//! ```text
//! ┌ Search ───────────────────────────────────────┐
//! │Search: rust async               [ Submit ]    │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Submit is disabled while the draft term is empty. An accepted Enter is
//! consumed here and turned into `SearchFormEvent::Submit`; nothing else
//! sees it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_input::{TextInput, TextInputEvent};
use crate::tui::event::TuiEvent;

const LABEL: &str = "Search: ";
const SUBMIT: &str = " [ Submit ] ";

/// High-level events emitted by the SearchForm
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFormEvent {
    /// The draft term changed
    Input(String),
    /// The user submitted a non-empty draft
    Submit,
}

pub struct SearchForm {
    pub input: TextInput,
}

impl SearchForm {
    pub fn new(term: &str) -> Self {
        Self {
            input: TextInput::new(term, true),
        }
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.input.value.is_empty()
    }

    fn submit_style(&self) -> Style {
        if self.is_submit_enabled() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }
}

impl Component for SearchForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.input.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [label_area, input_area, submit_area] = Layout::horizontal([
            Constraint::Length(LABEL.len() as u16),
            Constraint::Min(1),
            Constraint::Length(SUBMIT.len() as u16),
        ])
        .areas(inner);

        frame.render_widget(
            Span::styled(LABEL, Style::default().add_modifier(Modifier::BOLD)),
            label_area,
        );
        self.input.render(frame, input_area);
        frame.render_widget(Span::styled(SUBMIT, self.submit_style()), submit_area);
    }
}

impl EventHandler for SearchForm {
    type Event = SearchFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => self.is_submit_enabled().then_some(SearchFormEvent::Submit),
            _ => self.input.handle_event(event).map(|input_event| match input_event {
                TextInputEvent::Changed(text) => SearchFormEvent::Input(text),
            }),
        }
    }
}
