//! Color palette for the Leafscan theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Green;

// --- Accent ---
pub const ACCENT: Color = Color::Green;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Severity banner colors ---
pub const SEVERITY_MILD: Color = Color::Yellow;
pub const SEVERITY_MODERATE: Color = Color::Rgb(255, 165, 0);
pub const SEVERITY_SEVERE: Color = Color::Red;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Thermal panel ---
pub const THERMAL_ACCENT: Color = Color::Magenta;
