//! # StoryItem Component
//!
//! One row of the story list: a pure projection of a `Story`.
//!
//! ```text
//! Title (55%)                      Author (15%)  Comments  Points  [Remove]
//!   https://example.com/the-article
//! ```

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::UnicodeWidthChar;

use crate::search::Story;

pub const REMOVE_LABEL: &str = "[Remove]";

/// Column widths as percentages of the row: title, author, comments, points, remove.
const COLUMN_PERCENT: [u16; 5] = [55, 15, 10, 10, 10];

pub struct StoryItem<'a> {
    pub story: &'a Story,
}

impl<'a> StoryItem<'a> {
    pub fn new(story: &'a Story) -> Self {
        Self { story }
    }

    /// Column widths for a row `width` cells wide.
    pub fn columns(width: u16) -> [usize; 5] {
        COLUMN_PERCENT.map(|percent| (width as usize * percent as usize) / 100)
    }

    /// The header row matching `to_list_item`'s columns.
    pub fn header(width: u16) -> Line<'static> {
        let [title, author, comments, points, _] = Self::columns(width);
        let style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        Line::from(vec![
            Span::styled(fit_column("Title", title), style),
            Span::styled(fit_column("Author", author), style),
            Span::styled(fit_column("Comments", comments), style),
            Span::styled(fit_column("Points", points), style),
        ])
    }

    pub fn to_list_item(&self, width: u16) -> ListItem<'static> {
        let [title, author, comments, points, remove] = Self::columns(width);
        let story = self.story;

        let row = Line::from(vec![
            Span::styled(
                fit_column(&story.title, title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(fit_column(&story.author, author), Style::default().fg(Color::Cyan)),
            Span::raw(fit_column(&story.num_comments.to_string(), comments)),
            Span::styled(
                fit_column(&story.points.to_string(), points),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(fit_column(REMOVE_LABEL, remove), Style::default().fg(Color::Red)),
        ]);

        let link = Line::from(Span::styled(
            fit_column(&format!("  {}", story.url), width as usize),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ));

        ListItem::new(vec![row, link])
    }
}

/// Pads or truncates `text` to exactly `width` display columns, keeping one
/// trailing space as a column gap. Truncation is marked with "…".
pub fn fit_column(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;

    let mut out = String::new();
    let mut used = 0;
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    let limit = if total > budget { budget.saturating_sub(1) } else { budget };
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    if total > budget && budget > 0 {
        out.push('…');
        used += 1;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
