//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level screen areas.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title row plus modality tab bar.
    pub header: Rect,
    /// Main content: preview/report or an overlay.
    pub body: Rect,
    /// Single-row key hint bar.
    pub status: Rect,
}

/// Split the terminal into header, body, and status areas.
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Centered sub-rectangle used for modal overlays (picker, spinner).
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
