//! Application state (Model in TEA pattern)
//!
//! All flags the original demo scattered across independent UI hooks live in
//! one owner here, mutated only by the update function.

use std::path::PathBuf;

use leafscan_core::{DiagnosticResult, Modality, ModelMetadata};

use crate::analyzer::RequestId;
use crate::file_picker::FilePickerState;
use crate::image::LoadedImage;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Main diagnostic screen: tabs, preview, report.
    #[default]
    Diagnostic,

    /// Image file picker overlay.
    FilePicker,

    /// Static about screen. Terminal state with a single transition back.
    About,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub phase: AppPhase,

    /// Active imaging modality (tab).
    pub modality: Modality,

    /// The currently loaded image, if any.
    pub image: Option<LoadedImage>,

    /// Whether an analysis request is in flight.
    pub analyzing: bool,

    /// Latest applied diagnostic result. Replaced whole, never mutated.
    pub result: Option<DiagnosticResult>,

    /// Display-only metadata for the model that produced `result`.
    pub model_info: Option<ModelMetadata>,

    /// User-displayable message for the last recoverable error.
    pub error: Option<String>,

    /// Id of the most recently issued analysis request. Completions carrying
    /// any other id are stale and discarded.
    pub latest_request: RequestId,

    /// Directory the picker opens in.
    pub pick_root: PathBuf,
    pub picker: FilePickerState,

    /// Animation frame for the analysis spinner.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(pick_root: PathBuf) -> Self {
        Self {
            ui_mode: UiMode::default(),
            phase: AppPhase::default(),
            modality: Modality::default(),
            image: None,
            analyzing: false,
            result: None,
            model_info: None,
            error: None,
            latest_request: 0,
            pick_root,
            picker: FilePickerState::default(),
            spinner_frame: 0,
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Issue the next request id, superseding whatever was in flight.
    pub fn next_request_id(&mut self) -> RequestId {
        self.latest_request += 1;
        self.latest_request
    }

    /// Whether a completion for `id` is still the one the UI is waiting for.
    pub fn is_latest_request(&self, id: RequestId) -> bool {
        id == self.latest_request
    }

    /// Drop the image and everything derived from it.
    ///
    /// Bumps the request counter so an in-flight completion cannot
    /// resurrect the cleared state.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.result = None;
        self.model_info = None;
        self.error = None;
        self.analyzing = false;
        self.latest_request += 1;
    }

    /// Mark the start of a new analysis, clearing superseded output.
    pub fn begin_analysis(&mut self) {
        self.analyzing = true;
        self.error = None;
        self.result = None;
        self.model_info = None;
    }
}
