//! Main header: app title plus the modality tab bar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use leafscan_app::AppState;
use leafscan_core::Modality;

use crate::theme::{styles, IconSet};

/// Widget displaying the title row and the Visible/Infrared tabs.
pub struct MainHeader<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(format!("{} Leafscan", self.icons.leaf()), styles::accent_bold()),
            Span::raw("  "),
        ];
        if let Some(image) = &self.state.image {
            spans.push(Span::styled(image.file_name(), styles::text_secondary()));
            spans.push(Span::styled(
                format!("  {} · {} bytes", image.mime, image.byte_len),
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(
                "no image loaded".to_string(),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        [Modality::Visible, Modality::Infrared]
            .iter()
            .map(|m| {
                let icon = match m {
                    Modality::Visible => self.icons.camera(),
                    Modality::Infrared => self.icons.thermometer(),
                };
                Line::from(format!(" {} {} ", icon, m.label()))
            })
            .collect()
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        Paragraph::new(self.title_line()).render(rows[0], buf);

        let selected = match self.state.modality {
            Modality::Visible => 0,
            Modality::Infrared => 1,
        };
        Tabs::new(self.tab_titles())
            .select(selected)
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn render_header(state: &AppState) -> String {
        let backend = TestBackend::new(60, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(MainHeader::new(state, IconSet::new(false)), f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_header_shows_both_tabs() {
        let state = AppState::new(PathBuf::from("."));
        let content = render_header(&state);
        assert!(content.contains("Visible"));
        assert!(content.contains("Infrared"));
        assert!(content.contains("no image loaded"));
    }

    #[test]
    fn test_header_shows_loaded_file_name() {
        let mut state = AppState::new(PathBuf::from("."));
        state.image = Some(leafscan_app::LoadedImage {
            path: PathBuf::from("/photos/leaf.png"),
            mime: "image/png",
            byte_len: 123,
            data: String::new(),
        });
        let content = render_header(&state);
        assert!(content.contains("leaf.png"));
        assert!(content.contains("image/png"));
    }
}
