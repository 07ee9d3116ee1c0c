//! # TextInput Component
//!
//! Single-line controlled text field.
//!
//! The text is a prop: the parent owns the real value (the persisted search
//! term) and pushes it back in with `set_value()` every frame. Edits are
//! applied locally so a burst of keystrokes between frames stays consistent,
//! and each one is reported as `TextInputEvent::Changed` with the new value.
//!
//! When `is_focused` is set the component places the terminal cursor;
//! otherwise it renders as a plain field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum TextInputEvent {
    /// The text changed; carries the full new value.
    Changed(String),
}

pub struct TextInput {
    /// Current text (Prop, mirrored locally)
    pub value: String,
    /// Whether this field owns the terminal cursor (Prop)
    pub is_focused: bool,
    /// Cursor position as byte offset in `value`
    cursor: usize,
    /// Display columns scrolled off the left edge
    scroll: u16,
}

impl TextInput {
    pub fn new(value: &str, is_focused: bool) -> Self {
        Self {
            value: value.to_string(),
            is_focused,
            cursor: value.len(),
            scroll: 0,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sync the value prop from the parent. The cursor moves to the end when
    /// the text was replaced from outside.
    pub fn set_value(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            self.cursor = self.value.len();
        }
    }

    fn changed(&self) -> Option<TextInputEvent> {
        Some(TextInputEvent::Changed(self.value.clone()))
    }

    /// Display width of the text before the cursor.
    fn cursor_column(&self) -> u16 {
        self.value[..self.cursor].width() as u16
    }
}

impl Component for TextInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 {
            return;
        }

        // Keep the cursor inside the visible window
        let column = self.cursor_column();
        let last_visible = area.width.saturating_sub(1);
        if column < self.scroll {
            self.scroll = column;
        } else if column - self.scroll > last_visible {
            self.scroll = column - last_visible;
        }

        let field = Paragraph::new(self.value.as_str())
            .style(Style::default().fg(Color::Green))
            .scroll((0, self.scroll));
        frame.render_widget(field, area);

        if self.is_focused {
            frame.set_cursor_position((area.x + column - self.scroll, area.y));
        }
    }
}

impl EventHandler for TextInput {
    type Event = TextInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: pasted line breaks become spaces
                let line: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if line.is_empty() {
                    return None;
                }
                self.value.insert_str(self.cursor, &line);
                self.cursor += line.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.value, self.cursor);
                self.value.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.value.len() {
                    return None;
                }
                let next = next_char_boundary(&self.value, self.cursor);
                self.value.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.value, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.value.len();
                None
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
