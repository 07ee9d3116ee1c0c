use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, StoriesState};
use crate::tui::component::Component;
use crate::tui::components::{StoryList, TitleBar};
use crate::tui::{Focus, TuiState};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const ERROR_MESSAGE: &str = "Something went wrong...";
pub const LOADING_MESSAGE: &str = "Loading...";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, form_area, main_area, help_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(status_text(&app.stories, &app.committed_term, spinner_frame));
    title_bar.render(frame, title_area);

    tui.search_form.render(frame, form_area);

    draw_stories(frame, main_area, &app.stories, tui);

    frame.render_widget(help_line(tui.focus), help_area);
}

/// Error notice on top, then either the loading notice or the list.
fn draw_stories(frame: &mut Frame, area: Rect, stories: &StoriesState, tui: &mut TuiState) {
    let area = if stories.is_error {
        let [error_area, rest] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new(ERROR_MESSAGE).style(Style::default().fg(Color::Red)),
            error_area,
        );
        rest
    } else {
        area
    };

    if stories.is_loading {
        frame.render_widget(
            Paragraph::new(LOADING_MESSAGE).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    } else {
        StoryList::new(&stories.data, &mut tui.story_list, tui.focus == Focus::List)
            .render(frame, area);
    }
}

fn status_text(stories: &StoriesState, term: &str, spinner_frame: usize) -> String {
    if stories.is_loading {
        format!("{} {}", SPINNER[spinner_frame % SPINNER.len()], LOADING_MESSAGE)
    } else if stories.is_error {
        ERROR_MESSAGE.to_string()
    } else if stories.data.is_empty() {
        String::new()
    } else {
        let count = stories.data.len();
        let noun = if count == 1 { "story" } else { "stories" };
        format!("{count} {noun} for \"{term}\"")
    }
}

fn help_line(focus: Focus) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::DarkGray);
    let mut spans = match focus {
        Focus::Search => vec![
            Span::styled(" Enter", key),
            Span::styled(" search  ", text),
        ],
        Focus::List => vec![
            Span::styled(" ↑↓", key),
            Span::styled(" select  ", text),
            Span::styled("d", key),
            Span::styled(" remove  ", text),
        ],
    };
    spans.extend([
        Span::styled("Tab", key),
        Span::styled(" switch focus  ", text),
        Span::styled("Esc", key),
        Span::styled(" quit", text),
    ]);
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, StoriesAction, stories_reducer, update};
    use crate::test_support::{story, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui, 0);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_initial() {
        let app = test_app();
        let mut tui = TuiState::new(app.search_term.get());
        let text = render(&app, &mut tui);
        assert!(text.contains("My Hacker Stories"));
        assert!(text.contains("Search: React"));
        assert!(text.contains("No stories."));
    }

    #[test]
    fn test_loading_hides_list() {
        let mut app = test_app();
        app.stories = stories_reducer(
            &stories_reducer(&app.stories, StoriesAction::FetchSuccess(vec![story("1")])),
            StoriesAction::FetchInit,
        );
        let mut tui = TuiState::new(app.search_term.get());
        let text = render(&app, &mut tui);
        assert!(text.contains(LOADING_MESSAGE));
        assert!(!text.contains("Story 1"));
    }

    #[test]
    fn test_error_shows_message_above_previous_data() {
        let mut app = test_app();
        app.stories = stories_reducer(
            &stories_reducer(&app.stories, StoriesAction::FetchSuccess(vec![story("1")])),
            StoriesAction::FetchFailure,
        );
        let mut tui = TuiState::new(app.search_term.get());
        let text = render(&app, &mut tui);
        assert!(text.contains(ERROR_MESSAGE));
        assert!(text.contains("Story 1"));
    }

    #[test]
    fn test_status_names_committed_term_not_draft() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        let generation = app.fetch_generation;
        update(
            &mut app,
            Action::Stories {
                generation,
                action: StoriesAction::FetchSuccess(vec![story("1")]),
            },
        );
        update(&mut app, Action::SearchInput("Vue".to_string()));

        let mut tui = TuiState::new(app.search_term.get());
        let text = render(&app, &mut tui);
        assert!(text.contains("1 story for \"React\""));
        assert!(!text.contains("for \"Vue\""));

        update(&mut app, Action::SearchSubmit);
        let generation = app.fetch_generation;
        update(
            &mut app,
            Action::Stories {
                generation,
                action: StoriesAction::FetchSuccess(vec![story("2")]),
            },
        );
        let text = render(&app, &mut tui);
        assert!(text.contains("1 story for \"Vue\""));
    }

    #[test]
    fn test_status_text() {
        let loaded = StoriesState {
            data: vec![story("1"), story("2")],
            is_loading: false,
            is_error: false,
        };
        assert_eq!(status_text(&loaded, "rust", 0), "2 stories for \"rust\"");

        let single = StoriesState {
            data: vec![story("1")],
            ..StoriesState::default()
        };
        assert_eq!(status_text(&single, "rust", 0), "1 story for \"rust\"");
        assert_eq!(status_text(&StoriesState::default(), "rust", 0), "");

        let loading = StoriesState {
            is_loading: true,
            ..StoriesState::default()
        };
        assert!(status_text(&loading, "rust", 3).ends_with(LOADING_MESSAGE));
    }
}
