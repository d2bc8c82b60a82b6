//! Top-level rendering: composes widgets into the frame per UI mode.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use leafscan_app::{AppState, UiMode};

use crate::layout::{centered_rect, create};
use crate::theme::{palette, styles, IconSet};
use crate::widgets::{
    AboutScreen, MainHeader, PickerDialog, ResultPanel, StatusBar, ThermalPanel,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the whole UI for one frame.
pub fn view(frame: &mut Frame, state: &AppState, icons: IconSet) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = create(area);
    frame.render_widget(MainHeader::new(state, icons), areas.header);

    match state.ui_mode {
        UiMode::About => {
            frame.render_widget(AboutScreen::new(icons), areas.body);
        }
        UiMode::Diagnostic | UiMode::FilePicker => {
            render_diagnostic_body(frame, state, icons, areas.body);
        }
    }

    if state.ui_mode == UiMode::FilePicker {
        let modal = centered_rect(70, 60, area);
        frame.render_widget(PickerDialog::new(&state.picker, icons), modal);
    }

    if state.analyzing {
        render_spinner_overlay(frame, state, area);
    }

    frame.render_widget(StatusBar::new(state), areas.status);
}

fn render_diagnostic_body(frame: &mut Frame, state: &AppState, icons: IconSet, area: Rect) {
    let Some(result) = &state.result else {
        render_empty_body(frame, state, icons, area);
        return;
    };

    // Thermal findings get their own panel below the report when present.
    if let Some(thermal) = &result.thermal {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(8)])
            .split(area);
        frame.render_widget(
            ResultPanel::new(result, icons).model_info(state.model_info.as_ref()),
            rows[0],
        );
        frame.render_widget(ThermalPanel::new(thermal, icons), rows[1]);
    } else {
        frame.render_widget(
            ResultPanel::new(result, icons).model_info(state.model_info.as_ref()),
            area,
        );
    }
}

fn render_empty_body(frame: &mut Frame, state: &AppState, icons: IconSet, area: Rect) {
    let message = if state.image.is_some() {
        if state.analyzing {
            format!("Analyzing with the {} model...", state.modality.label())
        } else {
            "Image loaded. Switch modality with Tab to re-run the analysis.".to_string()
        }
    } else {
        format!(
            "{} No image loaded. Press o to open a leaf photograph.",
            icons.leaf()
        )
    };

    let block = styles::panel_block(false).title(" Diagnosis ");
    let inner_height = area.height.saturating_sub(2);
    let pad = (inner_height / 2) as usize;
    let mut lines = vec![Line::default(); pad];
    lines.push(Line::from(Span::styled(message, styles::text_muted())).centered());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_spinner_overlay(frame: &mut Frame, state: &AppState, area: Rect) {
    let frame_glyph = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
    let modal = centered_rect(40, 20, area);
    frame.render_widget(Clear, modal);
    let block = styles::modal_block(" Analyzing ");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);
    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{frame_glyph} "), styles::accent_bold()),
            Span::styled(
                format!("Running {} analysis...", state.modality.label()),
                styles::text_primary(),
            ),
        ])
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafscan_app::analyzer::{infrared_demo_result, visible_demo_result};
    use leafscan_core::ModelMetadata;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn render_state(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| view(f, state, IconSet::new(false)))
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
    fn test_empty_state_prompts_for_image() {
        let state = AppState::new(PathBuf::from("."));
        let content = render_state(&state);
        assert!(content.contains("No image loaded"));
        assert!(content.contains("open image"));
    }

    #[test]
    fn test_result_screen_shows_report() {
        let mut state = AppState::new(PathBuf::from("."));
        state.result = Some(visible_demo_result());
        state.model_info = Some(ModelMetadata {
            model_name: "Leafscan Demo".to_string(),
            architecture: "ResNet-152".to_string(),
            accuracy_percent: 98.7,
        });
        let content = render_state(&state);
        assert!(content.contains("Tomato Early Blight"));
        assert!(content.contains("Confidence"));
    }

    #[test]
    fn test_infrared_result_includes_thermal_panel() {
        let mut state = AppState::new(PathBuf::from("."));
        state.result = Some(infrared_demo_result());
        state.model_info = None;
        let content = render_state(&state);
        assert!(content.contains("Thermal analysis"));
        assert!(content.contains("Water content"));
    }

    #[test]
    fn test_picker_overlay_rendered() {
        let mut state = AppState::new(PathBuf::from("."));
        state.ui_mode = UiMode::FilePicker;
        state.picker.finish_scan(vec![PathBuf::from("leaf.png")]);
        let content = render_state(&state);
        assert!(content.contains("Open image"));
        assert!(content.contains("leaf.png"));
    }

    #[test]
    fn test_analyzing_overlay_rendered() {
        let mut state = AppState::new(PathBuf::from("."));
        state.analyzing = true;
        let content = render_state(&state);
        assert!(content.contains("Running Visible analysis"));
    }

    #[test]
    fn test_about_screen_replaces_body() {
        let mut state = AppState::new(PathBuf::from("."));
        state.ui_mode = UiMode::About;
        let content = render_state(&state);
        assert!(content.contains("About"));
        assert!(content.contains("demonstration data"));
    }
}
