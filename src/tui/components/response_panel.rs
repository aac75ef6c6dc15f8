//! # ResponsePanel Component
//!
//! Shows the current response (or a loading line, or a placeholder) in a
//! scrollable bordered panel. Scroll position lives in `TuiState` and is
//! borrowed for the frame, following the persistent state + transient
//! wrapper pattern.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct ResponsePanel<'a> {
    pub response: &'a str,
    pub is_loading: bool,
    pub theme: Theme,
    pub scroll: &'a mut ScrollViewState,
}

impl ResponsePanel<'_> {
    fn body_lines(&self, width: u16) -> Vec<Line<'static>> {
        if self.is_loading {
            return vec![Line::styled("Loading AI response...", self.theme.accent())];
        }
        if self.response.is_empty() {
            return vec![Line::styled(
                "Your AI summary will appear here",
                self.theme.muted().add_modifier(Modifier::ITALIC),
            )];
        }
        let options = textwrap::Options::new(usize::from(width.max(1)))
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        textwrap::wrap(self.response, options)
            .into_iter()
            .map(|line| Line::raw(line.into_owned()))
            .collect()
    }
}

/// Canvas rows for `lines` wrapped lines, saturating at the `u16` limit.
fn content_height(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).max(1)
}

impl Component for ResponsePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border())
            .title(" AI Response ")
            .style(self.theme.panel());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave one column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let lines = self.body_lines(content_width);
        let height = content_height(lines.len());

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines).style(self.theme.panel()),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, inner, self.scroll);
    }
}
