use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ACTION_BAR_HEIGHT, ActionBar, EntryList, HISTORY_PREVIEW_CHARS, NOTE_PREVIEW_CHARS,
    ResponsePanel, TitleBar, ToastOverlay,
};
use crate::tui::theme::Theme;
use crate::tui::{Focus, TuiState};

const INPUT_HEIGHT: u16 = 8;
const MAX_LIST_ROWS: u16 = 5;

/// Screen regions for one frame. Panels that are hidden get `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub title: Rect,
    pub input: Rect,
    pub actions: Rect,
    pub response: Option<Rect>,
    pub history: Option<Rect>,
    pub notes: Rect,
}

fn list_height(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX).clamp(1, MAX_LIST_ROWS) + 2
}

pub fn page_layout(area: Rect, app: &App) -> PageLayout {
    use Constraint::{Length, Min};

    let mut constraints = vec![Length(1), Length(INPUT_HEIGHT), Length(ACTION_BAR_HEIGHT)];
    if app.show_response {
        constraints.push(Min(5));
    }
    if app.show_history {
        constraints.push(Length(list_height(app.history.len())));
    }
    constraints.push(Length(list_height(app.saved_notes.len())));
    if !app.show_response {
        // Keep the page top-aligned when nothing stretches
        constraints.push(Min(0));
    }

    let areas = Layout::vertical(constraints).split(area);
    let mut next = 3;
    let response = app.show_response.then(|| {
        next += 1;
        areas[next - 1]
    });
    let history = app.show_history.then(|| {
        next += 1;
        areas[next - 1]
    });

    PageLayout {
        title: areas[0],
        input: areas[1],
        actions: areas[2],
        response,
        history,
        notes: areas[next],
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let theme = Theme::for_mode(app.dark_mode);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    let layout = page_layout(area, app);

    TitleBar {
        model_name: &app.model_name,
        is_loading: app.is_loading,
        theme,
    }
    .render(frame, layout.title);

    tui.input_box.counts = app.counts;
    tui.input_box.theme = theme;
    tui.input_box.focused = tui.focus == Focus::Input;
    tui.input_box.render(frame, layout.input);

    ActionBar {
        can_analyze: app.can_analyze(),
        is_loading: app.is_loading,
        has_response: !app.response.is_empty(),
        has_input: !app.input.is_empty(),
        show_response: app.show_response,
        show_history: app.show_history,
        history_len: app.history.len(),
        theme,
    }
    .render(frame, layout.actions);

    if let Some(rect) = layout.response {
        ResponsePanel {
            response: &app.response,
            is_loading: app.is_loading,
            theme,
            scroll: &mut tui.response_scroll,
        }
        .render(frame, rect);
    }

    if let Some(rect) = layout.history {
        EntryList {
            title: format!("History ({}) · Enter to restore", app.history.len()),
            entries: &app.history,
            preview_chars: HISTORY_PREVIEW_CHARS,
            empty_text: "No responses yet.",
            focused: tui.focus == Focus::History,
            theme,
            state: &mut tui.history,
        }
        .render(frame, rect);
    }

    EntryList {
        title: "Saved Notes · Enter to reuse".to_string(),
        entries: &app.saved_notes,
        preview_chars: NOTE_PREVIEW_CHARS,
        empty_text: "No saved notes yet.",
        focused: tui.focus == Focus::Notes,
        theme,
        state: &mut tui.notes,
    }
    .render(frame, layout.notes);

    if let Some(toast) = app.toast() {
        ToastOverlay { toast, theme }.render(frame, area);
    }
}
