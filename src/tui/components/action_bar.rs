//! # ActionBar Component
//!
//! Three rows under the editor: the word suggestions (F1–F5), then the
//! actions with their shortcuts, three per row so all of them fit in 80
//! columns. Unavailable actions render dimmed, the way disabled buttons
//! would.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Rows the bar occupies.
pub const ACTION_BAR_HEIGHT: u16 = 3;

use crate::core::action::WORD_SUGGESTIONS;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct ActionBar {
    pub can_analyze: bool,
    pub is_loading: bool,
    pub has_response: bool,
    pub has_input: bool,
    pub show_response: bool,
    pub show_history: bool,
    pub history_len: usize,
    pub theme: Theme,
}

impl ActionBar {
    fn suggestions_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Add: ", self.theme.muted())];
        for (i, word) in WORD_SUGGESTIONS.iter().enumerate() {
            spans.push(Span::styled(format!("F{}", i + 1), self.theme.accent()));
            spans.push(Span::raw(format!(" {word}  ")));
        }
        Line::from(spans)
    }

    fn action(&self, key: &str, label: &str, enabled: bool) -> Vec<Span<'static>> {
        let (key_style, label_style) = if enabled {
            (self.theme.accent(), self.theme.base())
        } else {
            (self.theme.disabled(), self.theme.disabled())
        };
        vec![
            Span::styled(key.to_string(), key_style),
            Span::styled(format!(" {label}  "), label_style),
        ]
    }

    /// Session actions on the first row, response and list actions on the second.
    fn actions_lines(&self) -> [Line<'static>; 2] {
        let analyze = if self.is_loading { "Analyzing..." } else { "Analyze with AI" };
        let response = if self.show_response { "Hide Response" } else { "Show Response" };
        let history = format!(
            "{} History ({})",
            if self.show_history { "Hide" } else { "Show" },
            self.history_len
        );

        let mut session = Vec::new();
        session.extend(self.action("^G", analyze, self.can_analyze));
        session.extend(self.action("^R", "Reset All", true));
        session.extend(self.action("^L", "Clear Input", self.has_input));

        let mut panels = Vec::new();
        panels.extend(self.action("^T", response, true));
        panels.extend(self.action("^Y", "Copy Response", self.has_response));
        panels.extend(self.action("^O", &history, true));

        [Line::from(session), Line::from(panels)]
    }
}

impl Component for ActionBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [session, panels] = self.actions_lines();
        let lines = vec![self.suggestions_line(), session, panels];
        frame.render_widget(Paragraph::new(lines).style(self.theme.base()), area);
    }
}
