//! # Application State
//!
//! Everything the page shows lives in `App`. This module contains domain
//! state only; presentation state (focus, list cursors, scroll offsets)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── generator: Arc<dyn TextGenerator>  // injected, lazily loaded
//! ├── model_name: String                 // sent with every request
//! ├── input: String                      // notes being edited
//! ├── counts: Counts                     // derived from input
//! ├── response: String                   // last output (or restored entry)
//! ├── is_loading: bool                   // generation in flight
//! ├── submitted_input: Option<String>    // input captured at Analyze
//! ├── history: Vec<String>               // outputs, newest first, ≤ 5
//! ├── saved_notes: Vec<String>           // inputs, newest first, ≤ 10
//! ├── dark_mode / show_response / show_history
//! └── toasts: ToastSlot                  // transient notification
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::counts::{Counts, derive_counts};
use crate::core::notes::MAX_SAVED_NOTES;
use crate::core::toast::{Toast, ToastSlot};
use crate::inference::{GenerationParams, TextGenerator};

pub const MAX_HISTORY: usize = 5;

pub struct App {
    pub generator: Arc<dyn TextGenerator>,
    pub model_name: String,
    pub params: GenerationParams,
    pub input: String,
    pub counts: Counts,
    pub response: String,
    pub is_loading: bool,
    /// The exact input handed to the generator; saved as a note on success.
    pub submitted_input: Option<String>,
    pub history: Vec<String>,
    pub saved_notes: Vec<String>,
    pub dark_mode: bool,
    pub show_response: bool,
    pub show_history: bool,
    pub toasts: ToastSlot,
}

impl App {
    pub fn new(generator: Arc<dyn TextGenerator>, model_name: String) -> Self {
        Self {
            generator,
            model_name,
            params: GenerationParams::default(),
            input: String::new(),
            counts: Counts::default(),
            response: String::new(),
            is_loading: false,
            submitted_input: None,
            history: Vec::new(),
            saved_notes: Vec::new(),
            dark_mode: true,
            show_response: true,
            show_history: false,
            toasts: ToastSlot::default(),
        }
    }

    pub fn from_config(
        generator: Arc<dyn TextGenerator>,
        config: &ResolvedConfig,
        saved_notes: Vec<String>,
    ) -> Self {
        let mut app = Self::new(generator, config.model_name.clone());
        app.dark_mode = config.dark_mode;
        app.saved_notes = saved_notes;
        app.saved_notes.truncate(MAX_SAVED_NOTES);
        app
    }

    /// Replaces the input and re-derives counts.
    pub fn set_input(&mut self, text: String) {
        self.input = text;
        self.counts = derive_counts(&self.input);
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    /// Whether Analyze would currently be accepted.
    pub fn can_analyze(&self) -> bool {
        !self.is_loading && crate::core::counts::meets_minimum(&self.input)
    }
}

/// Inserts `item` at the front and drops anything past `cap`.
pub fn push_front_capped(list: &mut Vec<String>, item: String, cap: usize) {
    list.insert(0, item);
    list.truncate(cap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.input.is_empty());
        assert!(app.response.is_empty());
        assert!(!app.is_loading);
        assert!(app.dark_mode);
        assert!(app.show_response);
        assert!(!app.show_history);
        assert!(app.toast().is_none());
        assert_eq!(app.model_name, "test-model");
        assert_eq!(app.params.max_new_tokens, 50);
    }

    #[test]
    fn test_set_input_derives_counts() {
        let mut app = test_app();
        app.set_input("Explain entropy in simple terms".to_string());
        assert_eq!(app.counts.words, 5);
        assert_eq!(app.counts.chars, 31);
        app.set_input("   ".to_string());
        assert_eq!(app.counts.words, 0);
    }

    #[test]
    fn test_push_front_capped() {
        let mut list = Vec::new();
        for i in 0..7 {
            push_front_capped(&mut list, i.to_string(), 5);
        }
        assert_eq!(list, vec!["6", "5", "4", "3", "2"]);
    }

    #[test]
    fn test_can_analyze_requires_length_and_idle() {
        let mut app = test_app();
        app.set_input("short".to_string());
        assert!(!app.can_analyze());
        app.set_input("long enough input".to_string());
        assert!(app.can_analyze());
        app.is_loading = true;
        assert!(!app.can_analyze());
    }
}
