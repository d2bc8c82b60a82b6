//! leafscan-app - Application state and orchestration for Leafscan
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] owner, a [`Message`] enum, and a pure-ish
//! [`handler::update`] function returning follow-up messages and background
//! actions. It also holds image acquisition, the analyzer seam, and
//! configuration loading.

pub mod actions;
pub mod analyzer;
pub mod config;
pub mod file_picker;
pub mod handler;
pub mod image;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use analyzer::{Analyzer, RequestId, StubAnalyzer};
pub use file_picker::FilePickerState;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use image::{LoadedImage, MAX_IMAGE_BYTES};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, UiMode};
