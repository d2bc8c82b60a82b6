//! File picker overlay dialog.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use leafscan_app::FilePickerState;

use crate::theme::{styles, IconSet};

/// Truncate a display name so it fits the dialog width, keeping the tail
/// (extensions matter more than long prefixes here).
fn fit_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    let mut tail = String::new();
    for c in name.chars().rev() {
        let candidate_width = tail.width() + c.to_string().width();
        if candidate_width > max_width.saturating_sub(1) {
            break;
        }
        tail.insert(0, c);
    }
    format!("…{tail}")
}

pub struct PickerDialog<'a> {
    picker: &'a FilePickerState,
    icons: IconSet,
}

impl<'a> PickerDialog<'a> {
    pub fn new(picker: &'a FilePickerState, icons: IconSet) -> Self {
        Self { picker, icons }
    }
}

impl Widget for PickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let title = format!(" Open image · {} ", self.picker.dir.display());
        let block = styles::modal_block(&title);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.picker.loading {
            Paragraph::new(Line::from(Span::styled(
                "Scanning directory...",
                styles::text_muted(),
            )))
            .render(inner, buf);
            return;
        }

        if self.picker.entries.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No image files found here.",
                styles::text_muted(),
            )))
            .render(inner, buf);
            return;
        }

        let name_width = inner.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .picker
            .entries
            .iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", self.icons.chevron_right()), styles::accent()),
                    Span::styled(fit_name(&name, name_width), styles::text_primary()),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.picker.selected));

        StatefulWidget::render(
            List::new(items).highlight_style(styles::focused_selected()),
            inner,
            buf,
            &mut list_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn render_dialog(picker: &FilePickerState) -> String {
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(PickerDialog::new(picker, IconSet::new(false)), f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_lists_file_names() {
        let mut picker = FilePickerState::default();
        picker.finish_scan(vec![
            PathBuf::from("/photos/leaf_a.png"),
            PathBuf::from("/photos/leaf_b.jpg"),
        ]);
        let content = render_dialog(&picker);
        assert!(content.contains("leaf_a.png"));
        assert!(content.contains("leaf_b.jpg"));
    }

    #[test]
    fn test_empty_listing_message() {
        let mut picker = FilePickerState::default();
        picker.finish_scan(vec![]);
        let content = render_dialog(&picker);
        assert!(content.contains("No image files found"));
    }

    #[test]
    fn test_loading_message() {
        let mut picker = FilePickerState::default();
        picker.begin_scan(std::path::Path::new("/photos"));
        let content = render_dialog(&picker);
        assert!(content.contains("Scanning"));
    }

    #[test]
    fn test_fit_name_keeps_extension() {
        let fitted = fit_name("a_very_long_photograph_name.png", 12);
        assert!(fitted.starts_with('…'));
        assert!(fitted.ends_with(".png"));
        assert!(fitted.width() <= 12);
    }

    #[test]
    fn test_fit_name_short_passthrough() {
        assert_eq!(fit_name("leaf.png", 20), "leaf.png");
    }
}
