//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Ctrl+G? That's `Action::Analyze`.
//! The generator answers? That's `Action::GenerationSucceeded(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect`s the adapter must carry out. No I/O
//! happens here: spawning the generation, writing the store, touching the
//! clipboard, and arming the toast timer are all effects.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effects
//! ```
//!
//! Session lifecycle:
//!
//! ```text
//!   Idle ──Analyze (≥10 chars)──▶ Generating ──Succeeded──▶ Ready
//!    ▲  └─Analyze (<10)─▶ toast      │                       │
//!    │                               └──Failed──▶ Failed     │
//!    └──────────────────Reset───────────────────────────────-┘
//! ```

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::error::SessionError;
use crate::core::notes::MAX_SAVED_NOTES;
use crate::core::state::{App, MAX_HISTORY, push_front_capped};
use crate::core::toast::{TOAST_DURATION, ToastKind};

/// Words offered as one-key additions to the input.
pub const WORD_SUGGESTIONS: [&str; 5] = ["Summarize", "Explain", "Define", "List", "Compare"];

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetInput(String),
    ClearInput,
    AppendSuggestion(String),
    Analyze,
    GenerationSucceeded(String),
    GenerationFailed(String),
    Reset,
    ToggleDarkMode,
    ToggleResponse,
    ToggleHistory,
    CopyResponse,
    ClipboardFailed(String),
    /// Show a history entry (by index) as the current response.
    RestoreHistory(usize),
    /// Load a saved note (by index) back into the input.
    ReuseNote(usize),
    PersistFailed(String),
    ToastExpired(u64),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the generator on this prompt and report back with
    /// `GenerationSucceeded` or `GenerationFailed`.
    SpawnGeneration(String),
    /// Write the saved-notes list through to the store.
    PersistNotes(Vec<String>),
    CopyToClipboard(String),
    /// Arm the toast timer; on fire, dispatch `ToastExpired(id)`.
    ScheduleToastDismiss { id: u64, after: Duration },
    Quit,
}

fn show_toast(app: &mut App, message: impl Into<String>, kind: ToastKind) -> Effect {
    let id = app.toasts.show(message, kind);
    Effect::ScheduleToastDismiss {
        id,
        after: TOAST_DURATION,
    }
}

fn report(app: &mut App, error: &SessionError) -> Effect {
    show_toast(app, error.user_message(), ToastKind::Error)
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::SetInput(text) => {
            app.set_input(text);
            vec![]
        }
        Action::ClearInput => {
            if !app.input.is_empty() {
                app.set_input(String::new());
            }
            vec![]
        }
        Action::AppendSuggestion(word) => {
            let mut text = std::mem::take(&mut app.input);
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&word);
            app.set_input(text);
            vec![]
        }
        Action::Analyze => {
            if app.is_loading {
                debug!("Analyze ignored: generation already in flight");
                return vec![];
            }
            if !crate::core::counts::meets_minimum(&app.input) {
                let error = SessionError::too_short();
                info!("{}", error);
                return vec![report(app, &error)];
            }
            info!("Analyze accepted ({} chars)", app.counts.chars);
            app.is_loading = true;
            app.submitted_input = Some(app.input.clone());
            vec![Effect::SpawnGeneration(app.input.clone())]
        }
        Action::GenerationSucceeded(output) => {
            if !app.is_loading {
                warn!("Dropping generation result that arrived while idle");
                return vec![];
            }
            app.is_loading = false;
            app.response = output.clone();
            push_front_capped(&mut app.history, output, MAX_HISTORY);

            let mut effects = Vec::new();
            if let Some(submitted) = app.submitted_input.take() {
                push_front_capped(&mut app.saved_notes, submitted, MAX_SAVED_NOTES);
                effects.push(Effect::PersistNotes(app.saved_notes.clone()));
            }
            effects.push(show_toast(app, "Note saved!", ToastKind::Info));
            effects
        }
        Action::GenerationFailed(cause) => {
            if !app.is_loading {
                warn!("Dropping generation failure that arrived while idle");
                return vec![];
            }
            let error = SessionError::Generation(cause);
            warn!("{}", error);
            app.is_loading = false;
            // Saved notes are only written on success.
            app.submitted_input = None;
            vec![report(app, &error)]
        }
        Action::Reset => {
            app.set_input(String::new());
            app.response.clear();
            app.history.clear();
            app.show_response = true;
            vec![show_toast(app, "Reset all!", ToastKind::Info)]
        }
        Action::ToggleDarkMode => {
            app.dark_mode = !app.dark_mode;
            vec![]
        }
        Action::ToggleResponse => {
            app.show_response = !app.show_response;
            vec![]
        }
        Action::ToggleHistory => {
            app.show_history = !app.show_history;
            vec![]
        }
        Action::CopyResponse => {
            if app.response.is_empty() {
                return vec![];
            }
            let text = app.response.clone();
            vec![
                Effect::CopyToClipboard(text),
                show_toast(app, "Copied AI response!", ToastKind::Info),
            ]
        }
        Action::ClipboardFailed(cause) => {
            warn!("Clipboard write failed: {}", cause);
            vec![show_toast(app, "Could not copy to clipboard", ToastKind::Error)]
        }
        Action::RestoreHistory(index) => {
            if let Some(entry) = app.history.get(index) {
                app.response = entry.clone();
            }
            vec![]
        }
        Action::ReuseNote(index) => {
            let Some(note) = app.saved_notes.get(index).cloned() else {
                return vec![];
            };
            app.set_input(note);
            vec![show_toast(app, "Loaded saved note", ToastKind::Info)]
        }
        Action::PersistFailed(cause) => {
            warn!("Saving notes failed: {}", cause);
            vec![show_toast(app, "Could not save notes to disk", ToastKind::Error)]
        }
        Action::ToastExpired(id) => {
            app.toasts.dismiss(id);
            vec![]
        }
        Action::Quit => vec![Effect::Quit],
    }
}
