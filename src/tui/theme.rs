//! Light and dark palettes.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    fg: Color,
    bg: Color,
    muted: Color,
    border: Color,
    accent: Color,
    panel_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            dark: true,
            fg: Color::White,
            bg: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            accent: Color::LightBlue,
            panel_bg: Color::Rgb(17, 24, 39),
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,
            fg: Color::Black,
            bg: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Blue,
            panel_bg: Color::Rgb(243, 244, 246),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel_bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled(&self) -> Style {
        self.muted().add_modifier(Modifier::DIM)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(Color::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert!(Theme::for_mode(true).dark);
        assert!(!Theme::for_mode(false).dark);
        assert_eq!(Theme::for_mode(true).base().bg, Some(Color::Black));
        assert_eq!(Theme::for_mode(false).base().bg, Some(Color::White));
    }
}
