//! # EntryList Component
//!
//! A titled, selectable list of long strings shown as one-line previews.
//! Used for both the response history and the saved notes. Activating an
//! entry hands back its index; the core resolves it to the full text, so
//! truncation never leaks into state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const HISTORY_PREVIEW_CHARS: usize = 120;
pub const NOTE_PREVIEW_CHARS: usize = 150;

/// First `max` characters on one line, with `...` when cut.
pub fn preview(text: &str, max: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() > max {
        let cut: String = flat.chars().take(max).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

/// Selection state for one list, kept in `TuiState`.
#[derive(Default)]
pub struct EntryListState {
    pub list_state: ListState,
}

impl EntryListState {
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keeps the selection inside `[0, len)`, selecting the first entry
    /// when there is none yet.
    pub fn clamp(&mut self, len: usize) {
        match (len, self.list_state.selected()) {
            (0, _) => self.list_state.select(None),
            (_, None) => self.list_state.select(Some(0)),
            (_, Some(i)) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn select_prev(&mut self, len: usize) {
        self.clamp(len);
        if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some(i.saturating_sub(1)));
        }
    }

    pub fn select_next(&mut self, len: usize) {
        self.clamp(len);
        if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some((i + 1).min(len - 1)));
        }
    }
}

pub struct EntryList<'a> {
    pub title: String,
    pub entries: &'a [String],
    pub preview_chars: usize,
    pub empty_text: &'a str,
    pub focused: bool,
    pub theme: Theme,
    pub state: &'a mut EntryListState,
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.theme.accent()
        } else {
            self.theme.border()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .style(self.theme.panel());

        if self.entries.is_empty() {
            let empty = Paragraph::new(Line::styled(
                self.empty_text.to_string(),
                self.theme.muted().add_modifier(Modifier::ITALIC),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.entries.len());
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(preview(entry, self.preview_chars)))
            .collect();

        let highlight = if self.focused {
            self.theme.highlight()
        } else {
            self.theme.panel()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol(if self.focused { "▸ " } else { "  " });

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
