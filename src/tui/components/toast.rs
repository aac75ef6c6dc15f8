//! # Toast Overlay
//!
//! Draws the current toast in the bottom-right corner, over whatever is
//! underneath. Visibility and expiry are core concerns; this only paints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::toast::{Toast, ToastKind};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const MARGIN: u16 = 1;

pub struct ToastOverlay<'a> {
    pub toast: &'a Toast,
    pub theme: Theme,
}

/// Rect for a toast of `message` anchored bottom-right in `area`.
pub fn toast_area(message: &str, area: Rect) -> Rect {
    let width = u16::try_from(message.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width.saturating_sub(MARGIN * 2));
    let height = 3.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width + MARGIN),
        y: area.y + area.height.saturating_sub(height + MARGIN),
        width,
        height,
    }
}

impl Component for ToastOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = toast_area(&self.toast.message, area);
        let border = match self.toast.kind {
            ToastKind::Info => self.theme.success(),
            ToastKind::Error => self.theme.danger(),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(format!(" {}", self.toast.message))
                .block(block)
                .style(self.theme.panel()),
            rect,
        );
    }
}
