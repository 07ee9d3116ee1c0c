//! # Core Application Logic
//!
//! This module contains the business logic of Hacker Stories.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Fetch    │      │  Persisted │
//!     │  Adapter   │      │ Controller │      │   value    │
//!     │ (ratatui)  │      │ (search)   │      │  (store)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `StoriesState` machine state
//! - [`action`]: `StoriesAction`, the reducer, and the app-level `update()`
//! - [`fetch`]: Runs one search and reports its transitions
//! - [`persist`]: Key-value stores and the two-phase persisted value
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod fetch;
pub mod persist;
pub mod state;
