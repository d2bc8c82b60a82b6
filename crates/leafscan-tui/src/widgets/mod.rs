//! Reusable widgets for the Leafscan screens.

pub mod about;
pub mod file_picker;
pub mod header;
pub mod result_panel;
pub mod status_bar;
pub mod thermal_panel;

pub use about::AboutScreen;
pub use file_picker::PickerDialog;
pub use header::MainHeader;
pub use result_panel::ResultPanel;
pub use status_bar::StatusBar;
pub use thermal_panel::ThermalPanel;
