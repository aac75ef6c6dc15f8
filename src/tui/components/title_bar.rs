//! # TitleBar Component
//!
//! Header row: app name on the left; model, generation status, and the
//! theme toggle hint on the right.
//!
//! Stateless: every field is a prop, rebuilt each frame from `App`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar<'a> {
    pub model_name: &'a str,
    pub is_loading: bool,
    pub theme: Theme,
}

impl TitleBar<'_> {
    fn status_text(&self) -> String {
        let mode = if self.theme.dark { "Light Mode" } else { "Dark Mode" };
        if self.is_loading {
            format!("model: {} | Analyzing... | ^D {} ", self.model_name, mode)
        } else {
            format!("model: {} | ^D {} ", self.model_name, mode)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let name = Paragraph::new(Line::from(Span::styled(
            " LLM Study Copilot",
            self.theme.base().add_modifier(Modifier::BOLD),
        )))
        .style(self.theme.base());
        frame.render_widget(name, area);

        let status = Paragraph::new(Line::from(Span::styled(self.status_text(), self.theme.muted())))
            .alignment(Alignment::Right);
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_offers_opposite_mode() {
        let bar = TitleBar {
            model_name: "distilgpt2",
            is_loading: false,
            theme: Theme::dark(),
        };
        assert_eq!(bar.status_text(), "model: distilgpt2 | ^D Light Mode ");

        let bar = TitleBar {
            model_name: "distilgpt2",
            is_loading: true,
            theme: Theme::light(),
        };
        assert!(bar.status_text().contains("Analyzing..."));
        assert!(bar.status_text().contains("Dark Mode"));
    }
}
