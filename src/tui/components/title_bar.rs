//! # TitleBar Component
//!
//! Top line: the headline plus a short status.
//!
//! TitleBar is purely presentational. It receives the status as a prop and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Loading...".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! The status is computed by the parent from `StoriesState`:
//!
//! 1. **Loading**: `"My Hacker Stories | ⠋ Loading..."`
//! 2. **Error**: `"My Hacker Stories | Something went wrong..."`
//! 3. **Loaded**: `"My Hacker Stories | 20 stories for \"rust\""`
//! 4. **No status**: `"My Hacker Stories"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const HEADLINE: &str = "My Hacker Stories";

pub struct TitleBar {
    /// Status text (e.g., "Loading...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            HEADLINE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Gray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
