//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: headline and status line
//! - `StoryItem`: one story row
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TextInput`: single-line controlled text field
//! - `SearchForm`: label + `TextInput` + submit control
//! - `StoryList`: scrollable rows with selection and removal
//!
//! Components receive external data as "props" (struct fields or render
//! parameters), not by reaching into `App`. The parent decides what each
//! emitted event means for the core.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Headline and status)
//! ├── search_form.rs   (Search row)
//! ├── text_input.rs    (Controlled text field)
//! ├── story_list.rs    (Scrollable story container)
//! └── story_item.rs    (Single story row)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod search_form;
pub use search_form::{SearchForm, SearchFormEvent};
pub mod story_item;
pub mod story_list;
pub use story_list::{StoryList, StoryListEvent, StoryListState};
pub mod text_input;
