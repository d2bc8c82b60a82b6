//! Semantic style builders for the Leafscan theme.

use leafscan_core::{ConfidenceLevel, Severity};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Green" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Banner color per severity: Mild is yellow, Moderate orange, Severe red.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Mild => palette::SEVERITY_MILD,
        Severity::Moderate => palette::SEVERITY_MODERATE,
        Severity::Severe => palette::SEVERITY_SEVERE,
    }
}

pub fn severity_style(severity: Severity) -> Style {
    Style::default()
        .fg(severity_color(severity))
        .add_modifier(Modifier::BOLD)
}

pub fn confidence_style(level: ConfidenceLevel) -> Style {
    let color = match level {
        ConfidenceLevel::Low => palette::STATUS_RED,
        ConfidenceLevel::Medium => palette::STATUS_YELLOW,
        ConfidenceLevel::High => palette::STATUS_GREEN,
    };
    Style::default().fg(color)
}

// --- Block builders ---
pub fn panel_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_color_mapping() {
        assert_eq!(severity_color(Severity::Mild), palette::SEVERITY_MILD);
        assert_eq!(
            severity_color(Severity::Moderate),
            palette::SEVERITY_MODERATE
        );
        assert_eq!(severity_color(Severity::Severe), palette::SEVERITY_SEVERE);
    }

    #[test]
    fn test_confidence_levels_get_distinct_styles() {
        let low = confidence_style(ConfidenceLevel::Low);
        let high = confidence_style(ConfidenceLevel::High);
        assert_ne!(low, high);
    }
}
