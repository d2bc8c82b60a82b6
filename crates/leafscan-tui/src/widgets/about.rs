//! About screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, IconSet};

pub struct AboutScreen {
    icons: IconSet,
}

impl AboutScreen {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    pub fn build_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                format!("{} Leafscan v{}", self.icons.leaf(), env!("CARGO_PKG_VERSION")),
                styles::accent_bold(),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Plant disease diagnosis demo.".to_string(),
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                "Load a leaf photograph, pick an imaging modality, and run the \
                 analysis to see a full diagnostic report."
                    .to_string(),
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{} ", self.icons.camera()), styles::accent()),
                Span::styled(
                    "Visible  classifies foliar diseases from standard photos".to_string(),
                    styles::text_secondary(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{} ", self.icons.thermometer()), styles::accent()),
                Span::styled(
                    "Infrared  surfaces thermal stress before symptoms show".to_string(),
                    styles::text_secondary(),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Results shown here are canned demonstration data, not a medical \
                 or agronomic assessment."
                    .to_string(),
                styles::text_muted(),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press a, Esc or Enter to return.".to_string(),
                styles::keybinding(),
            )),
        ]
    }
}

impl Widget for AboutScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" About ");
        Paragraph::new(self.build_lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_about_mentions_both_modalities() {
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(AboutScreen::new(IconSet::new(false)), f.area()))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Leafscan"));
        assert!(content.contains("Visible"));
        assert!(content.contains("Infrared"));
    }
}
