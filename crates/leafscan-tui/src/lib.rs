//! leafscan-tui - Terminal UI for Leafscan
//!
//! Rendering and the event loop. All state transitions live in
//! `leafscan-app`; this crate only draws [`leafscan_app::AppState`] and
//! translates terminal events into messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
pub use theme::IconSet;
