//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! translates keyboard events into `core::Action` values, and carries out
//! the `Effect`s the reducer asks for.
//!
//! This is the only module that knows about ratatui, crossterm and the
//! system clipboard.
//!
//! ## Event Loop
//!
//! ```text
//! terminal event ──► route_event ──► Action ──► update ──► Vec<Effect>
//!                                      ▲                      │
//!                                      │                      ▼
//!                        mpsc::Receiver ◄──── EffectRunner (tokio tasks)
//! ```
//!
//! Background work (generation, toast timers) reports back by sending
//! actions over a `std::sync::mpsc` channel that the loop drains after
//! handling input. Redraws only happen when something changed.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, WORD_SUGGESTIONS, update};
use crate::core::config::ResolvedConfig;
use crate::core::notes;
use crate::core::state::App;
use crate::core::store::KeyValueStore;
use crate::core::toast::ToastTimer;
use crate::inference::{GenerationRequest, TextGenerator};
use crate::tui::component::EventHandler;
use crate::tui::components::{EntryListState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    History,
    Notes,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub focus: Focus,
    pub response_scroll: ScrollViewState,
    pub history: EntryListState,
    pub notes: EntryListState,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            input_box: InputBox::new(theme),
            focus: Focus::Input, // User expects to type immediately
            response_scroll: ScrollViewState::default(),
            history: EntryListState::default(),
            notes: EntryListState::default(),
        }
    }

    /// Input → History (when shown) → Notes → Input, or the reverse.
    fn cycle_focus(&mut self, history_visible: bool, forward: bool) {
        let order: &[Focus] = if history_visible {
            &[Focus::Input, Focus::History, Focus::Notes]
        } else {
            &[Focus::Input, Focus::Notes]
        };
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter through; terminals
        // without it ignore the request
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

/// Translate one terminal event into a core action, updating TUI-only
/// state (focus, list selection, scroll) along the way.
fn route_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Analyze => return Some(Action::Analyze),
        TuiEvent::ResetAll => {
            tui.response_scroll = ScrollViewState::default();
            return Some(Action::Reset);
        }
        TuiEvent::ToggleResponse => return Some(Action::ToggleResponse),
        TuiEvent::CopyResponse => return Some(Action::CopyResponse),
        TuiEvent::ToggleHistory => {
            if app.show_history && tui.focus == Focus::History {
                tui.focus = Focus::Input;
            }
            return Some(Action::ToggleHistory);
        }
        TuiEvent::ToggleDarkMode => return Some(Action::ToggleDarkMode),
        TuiEvent::ClearInput => return Some(Action::ClearInput),
        TuiEvent::Suggestion(index) => {
            return WORD_SUGGESTIONS
                .get(index)
                .map(|word| Action::AppendSuggestion(word.to_string()));
        }
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.cycle_focus(app.show_history, event == TuiEvent::FocusNext);
            return None;
        }
        TuiEvent::Escape => {
            tui.focus = Focus::Input;
            return None;
        }
        TuiEvent::ScrollPageUp => {
            tui.response_scroll.scroll_page_up();
            return None;
        }
        TuiEvent::ScrollPageDown => {
            tui.response_scroll.scroll_page_down();
            return None;
        }
        TuiEvent::Resize => return None,
        _ => {}
    }

    match tui.focus {
        Focus::Input => {
            // Enter edits; Analyze has its own chord
            let event = if event == TuiEvent::Submit {
                TuiEvent::Newline
            } else {
                event
            };
            match tui.input_box.handle_event(&event)? {
                InputEvent::Changed(text) => Some(Action::SetInput(text)),
                InputEvent::CursorMoved => None,
            }
        }
        Focus::History | Focus::Notes => {
            // Typing jumps back to the editor
            if matches!(event, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) {
                tui.focus = Focus::Input;
                return route_event(event, app, tui);
            }
            let (list, len) = if tui.focus == Focus::History {
                (&mut tui.history, app.history.len())
            } else {
                (&mut tui.notes, app.saved_notes.len())
            };
            match event {
                TuiEvent::CursorUp => list.select_prev(len),
                TuiEvent::CursorDown => list.select_next(len),
                TuiEvent::Submit => {
                    list.clamp(len);
                    let index = list.selected()?;
                    return if tui.focus == Focus::History {
                        tui.response_scroll = ScrollViewState::default();
                        Some(Action::RestoreHistory(index))
                    } else {
                        tui.focus = Focus::Input;
                        Some(Action::ReuseNote(index))
                    };
                }
                _ => {}
            }
            None
        }
    }
}

/// Carries out reducer effects. Background work reports back over `tx`.
struct EffectRunner {
    tx: mpsc::Sender<Action>,
    store: Arc<dyn KeyValueStore>,
    toast_timer: ToastTimer,
    clipboard: Option<arboard::Clipboard>,
}

impl EffectRunner {
    fn new(tx: mpsc::Sender<Action>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            tx,
            store,
            toast_timer: ToastTimer::new(),
            clipboard: None,
        }
    }

    /// Applies `action` and runs the resulting effects, including any
    /// follow-up actions they produce synchronously. Returns true on quit.
    fn dispatch(&mut self, app: &mut App, action: Action) -> bool {
        let mut pending = vec![action];
        let mut quit = false;
        while let Some(action) = pending.pop() {
            debug!("Dispatching {:?}", action);
            for effect in update(app, action) {
                match self.run(app, effect) {
                    Ok(true) => quit = true,
                    Ok(false) => {}
                    Err(follow_up) => pending.push(follow_up),
                }
            }
        }
        quit
    }

    /// `Ok(true)` asks to quit; `Err` carries an action reporting a failure.
    fn run(&mut self, app: &App, effect: Effect) -> Result<bool, Action> {
        match effect {
            Effect::SpawnGeneration(prompt) => {
                spawn_generation(app, prompt, self.tx.clone());
                Ok(false)
            }
            Effect::PersistNotes(list) => {
                notes::persist_saved_notes(self.store.as_ref(), &list)
                    .map_err(|e| Action::PersistFailed(e.to_string()))?;
                Ok(false)
            }
            Effect::CopyToClipboard(text) => {
                self.copy(text)
                    .map_err(|e| Action::ClipboardFailed(e.to_string()))?;
                Ok(false)
            }
            Effect::ScheduleToastDismiss { id, after } => {
                let tx = self.tx.clone();
                self.toast_timer.schedule(after, move || {
                    if tx.send(Action::ToastExpired(id)).is_err() {
                        debug!("Toast {} expired after the loop exited", id);
                    }
                });
                Ok(false)
            }
            Effect::Quit => Ok(true),
        }
    }

    fn copy(&mut self, text: String) -> Result<(), arboard::Error> {
        // Held for the session: some platforms drop the selection with it
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        self.clipboard.insert(clipboard).set_text(text)
    }
}

fn spawn_generation(app: &App, prompt: String, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning generation with {} ({} chars)",
        app.generator.name(),
        prompt.chars().count()
    );

    let generator = app.generator.clone();
    let model = app.model_name.clone();
    let params = app.params;

    tokio::spawn(async move {
        let request = GenerationRequest {
            prompt: &prompt,
            model: &model,
            params,
        };
        let action = match generator.generate(request).await {
            Ok(text) => Action::GenerationSucceeded(text),
            Err(e) => Action::GenerationFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send generation result: receiver dropped");
        }
    });
}

/// Dispatches `action`, then re-syncs the editor so the next event in the
/// same batch edits the input the core just wrote (reset, clear, reuse,
/// suggestion). Returns true on quit.
fn apply_action(
    action: Action,
    app: &mut App,
    tui: &mut TuiState,
    effects: &mut EffectRunner,
) -> bool {
    let quit = effects.dispatch(app, action);
    tui.input_box.sync(&app.input);
    quit
}

fn apply_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    effects: &mut EffectRunner,
) -> bool {
    match route_event(event, app, tui) {
        Some(action) => apply_action(action, app, tui, effects),
        None => false,
    }
}

pub fn run(
    config: &ResolvedConfig,
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn KeyValueStore>,
) -> std::io::Result<()> {
    let saved_notes = notes::load_saved_notes(store.as_ref());
    let mut app = App::from_config(generator, config, saved_notes);
    let mut tui = TuiState::new(Theme::for_mode(app.dark_mode));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut effects = EffectRunner::new(tx, store);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Poll quickly while background work may report back
        let timeout = if app.is_loading || app.toasts.is_visible() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            should_quit |= apply_event(event, &mut app, &mut tui, &mut effects);
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            should_quit |= apply_action(action, &mut app, &mut tui, &mut effects);
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
