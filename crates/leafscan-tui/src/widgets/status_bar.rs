//! Bottom status bar with key hints and error reporting.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use leafscan_app::{AppState, UiMode};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::Diagnostic => {
                let mut hints = vec![("o", "open image"), ("Tab", "modality")];
                if self.state.image.is_some() {
                    hints.push(("c", "clear"));
                }
                hints.push(("a", "about"));
                hints.push(("q", "quit"));
                hints
            }
            UiMode::FilePicker => vec![
                ("↑/↓", "select"),
                ("Enter", "open"),
                ("Esc", "cancel"),
            ],
            UiMode::About => vec![("a/Esc", "back"), ("q", "quit")],
        }
    }

    fn build_line(&self) -> Line<'static> {
        if let Some(error) = &self.state.error {
            return Line::from(Span::styled(format!(" {error}"), styles::status_red()));
        }

        let mut spans = Vec::new();
        if self.state.analyzing {
            spans.push(Span::styled(" analyzing... ", styles::accent_bold()));
        }
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), styles::keybinding()));
            spans.push(Span::styled(format!("{action} "), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line()).render(area, buf);
    }
}
