use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Commands (translated to core::Action)
    Quit,
    Analyze,
    ResetAll,
    ToggleResponse,
    CopyResponse,
    ToggleHistory,
    ToggleDarkMode,
    ClearInput,
    Suggestion(usize),

    // Navigation (handled in the TUI)
    FocusNext,
    FocusPrev,
    Escape,
    Submit,
    ScrollPageUp,
    ScrollPageDown,

    // Editing (forwarded to the InputBox)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,

    Resize,
}

/// Poll for an event, waiting up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<TuiEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' | 'q' => Some(TuiEvent::Quit),
            'g' => Some(TuiEvent::Analyze),
            'r' => Some(TuiEvent::ResetAll),
            't' => Some(TuiEvent::ToggleResponse),
            'y' => Some(TuiEvent::CopyResponse),
            'o' => Some(TuiEvent::ToggleHistory),
            'd' => Some(TuiEvent::ToggleDarkMode),
            'l' => Some(TuiEvent::ClearInput),
            // Ctrl+J is ASCII LF; Ctrl+Enter sends this in most terminals
            'j' => Some(TuiEvent::Newline),
            _ => None,
        },
        KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
        KeyCode::F(n @ 1..=5) => Some(TuiEvent::Suggestion(usize::from(n - 1))),
        KeyCode::Enter if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
            Some(TuiEvent::Newline)
        }
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Tab => Some(TuiEvent::FocusNext),
        KeyCode::BackTab => Some(TuiEvent::FocusPrev),
        KeyCode::Esc => Some(TuiEvent::Escape),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),
        KeyCode::Left => Some(TuiEvent::CursorLeft),
        KeyCode::Right => Some(TuiEvent::CursorRight),
        KeyCode::Up => Some(TuiEvent::CursorUp),
        KeyCode::Down => Some(TuiEvent::CursorDown),
        KeyCode::Home => Some(TuiEvent::CursorHome),
        KeyCode::End => Some(TuiEvent::CursorEnd),
        KeyCode::PageUp => Some(TuiEvent::ScrollPageUp),
        KeyCode::PageDown => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}
