//! # InputBox Component
//!
//! The notes editor: a multi-line text area with live character and word
//! counts in its title.
//!
//! ## Responsibilities
//!
//! - Capture text input and bracketed paste (newlines preserved)
//! - Handle editing (backspace, delete, cursor movement)
//! - Keep the cursor visible by scrolling internally
//! - Display the counts derived by the core
//!
//! ## State Management
//!
//! The buffer here is a working copy. The core `App::input` is the source of
//! truth: every edit is reported as `InputEvent::Changed` and dispatched as
//! `Action::SetInput`, and whenever the core rewrites the input (reset,
//! clear, reuse note, suggestion) the event loop calls `sync()`.

mod layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::counts::Counts;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Border consumed on each side by the bordered block.
const BORDER: u16 = 1;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Buffer text changed; carries the full new text.
    Changed(String),
    /// Only the cursor moved.
    CursorMoved,
}

/// Notes editor.
///
/// # Props
///
/// - `counts`: derived counts from App state
/// - `theme`: current palette
/// - `focused`: whether keystrokes go here
///
/// # State
///
/// - `buffer`: working copy of the input
/// - `cursor`: byte offset in `buffer`
/// - `scroll`: first visible row
pub struct InputBox {
    pub buffer: String,
    pub counts: Counts,
    pub theme: Theme,
    pub focused: bool,
    cursor: usize,
    scroll: u16,
    /// Inner width from the last render, used for vertical movement.
    last_width: u16,
}

impl InputBox {
    pub fn new(theme: Theme) -> Self {
        Self {
            buffer: String::new(),
            counts: Counts::default(),
            theme,
            focused: true,
            cursor: 0,
            scroll: 0,
            last_width: 80,
        }
    }

    /// Adopt text written by the core. No-op when already equal, so the
    /// cursor survives the echo of our own edits.
    pub fn sync(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor = self.buffer.len();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    fn move_vertically(&mut self, delta: isize) -> bool {
        let rows = layout::rows(&self.buffer, self.last_width);
        let (row, col) = layout::locate(&self.buffer, &rows, self.cursor);
        let Some(target) = row.checked_add_signed(delta).filter(|t| *t < rows.len()) else {
            return false;
        };
        self.cursor = layout::offset_at(&self.buffer, rows[target], col);
        true
    }

    fn keep_cursor_visible(&mut self, visible_rows: u16) {
        let rows = layout::rows(&self.buffer, self.last_width);
        let (row, _) = layout::locate(&self.buffer, &rows, self.cursor);
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        let visible_rows = visible_rows.max(1);
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll.saturating_add(visible_rows) {
            self.scroll = row.saturating_add(1) - visible_rows;
        }
    }

    fn title(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" Paste Your Study Notes "),
            Span::styled(
                format!("· {} characters · {} words ", self.counts.chars, self.counts.words),
                self.theme.muted(),
            ),
        ])
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.last_width = area.width.saturating_sub(BORDER * 2).max(1);
        let inner_height = area.height.saturating_sub(BORDER * 2);
        self.keep_cursor_visible(inner_height);

        let rows = layout::rows(&self.buffer, self.last_width);
        let lines: Vec<Line> = if self.buffer.is_empty() {
            vec![Line::styled(
                "Paste your notes or textbook paragraphs here...",
                self.theme.muted().add_modifier(Modifier::ITALIC),
            )]
        } else {
            rows.iter()
                .skip(usize::from(self.scroll))
                .take(usize::from(inner_height))
                .map(|row| Line::raw(self.buffer[row.start..row.end].to_string()))
                .collect()
        };

        let border_style = if self.focused {
            self.theme.accent()
        } else {
            self.theme.border()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title());

        frame.render_widget(Paragraph::new(lines).block(block).style(self.theme.base()), area);

        if self.focused {
            let (row, col) = layout::locate(&self.buffer, &rows, self.cursor);
            let visible_row = u16::try_from(row)
                .unwrap_or(u16::MAX)
                .saturating_sub(self.scroll);
            frame.set_cursor_position((area.x + BORDER + col, area.y + BORDER + visible_row));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Newline => {
                self.buffer.insert(self.cursor, '\n');
                self.cursor += 1;
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => self.move_vertically(-1).then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self.move_vertically(1).then_some(InputEvent::CursorMoved),
            _ => None,
        }
    }
}

/// Byte offset of the character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn input_with(text: &str) -> InputBox {
        let mut input = InputBox::new(Theme::dark());
        input.sync(text);
        input
    }

    #[test]
    fn test_scroll_saturates_past_u16_rows() {
        let mut input = input_with(&"\n".repeat(70_000));
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();

        // Three visible rows, cursor pinned to the last addressable one
        assert_eq!(input.scroll, u16::MAX - 2);
        assert_eq!(input.cursor(), 70_000);
    }

    #[test]
    fn test_typing_reports_full_text() {
        let mut input = InputBox::new(Theme::dark());
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('a')),
            Some(InputEvent::Changed("a".to_string()))
        );
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::Changed("a".to_string()))
        );
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::new(Theme::dark());
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = input_with("café");
        assert_eq!(input.cursor(), 5);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caf");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.buffer, "caéf");
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut input = InputBox::new(Theme::dark());
        let event = input.handle_event(&TuiEvent::Paste("one\r\ntwo".to_string()));
        assert_eq!(event, Some(InputEvent::Changed("one\ntwo".to_string())));
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn test_sync_moves_cursor_only_on_change() {
        let mut input = input_with("hello");
        input.handle_event(&TuiEvent::CursorHome);
        input.sync("hello");
        assert_eq!(input.cursor(), 0);
        input.sync("");
        assert_eq!(input.cursor(), 0);
        input.sync("Summarize");
        assert_eq!(input.cursor(), 9);
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut input = input_with("abcdef\nxy\nlonger line");
        input.handle_event(&TuiEvent::CursorUp);
        // From end of "longer line" (col 11) up to "xy", clamped to col 2
        assert_eq!(input.cursor(), 9);
        input.handle_event(&TuiEvent::CursorUp);
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.handle_event(&TuiEvent::CursorUp), None);
    }

    #[test]
    fn test_render_shows_counts_and_placeholder() {
        let backend = TestBackend::new(70, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new(Theme::dark());
        input.counts = Counts { chars: 12, words: 3 };

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("12 characters"));
        assert!(text.contains("3 words"));
        assert!(text.contains("Paste your notes"));
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let backend = TestBackend::new(20, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = input_with("line1\nline2\nline3\nline4\nlast!");

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("last!"));
        assert!(!text.contains("line1"));
    }
}
