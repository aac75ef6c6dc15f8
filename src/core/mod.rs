//! # Core Application Logic
//!
//! This module contains the study copilot's business logic.
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
//!                    │  No I/O in the reducer. │
//!                    └───────────┬─────────────┘
//!                                │ Effects
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Store    │      │ Generator  │
//!     │  Adapter   │      │ (notes)    │      │  (engine)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`counts`]: Derived character/word counts
//! - [`toast`]: Toast slot and cancellable dismissal timer
//! - [`store`] / [`notes`]: Local key-value persistence of saved notes
//! - [`config`]: Config file, env, and CLI resolution

pub mod action;
pub mod config;
pub mod counts;
pub mod error;
pub mod notes;
pub mod state;
pub mod store;
pub mod toast;
