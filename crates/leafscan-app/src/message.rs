//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use leafscan_core::{DiagnosticResult, Modality, ModelMetadata};

use crate::analyzer::RequestId;
use crate::image::LoadedImage;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Diagnostic Screen Messages
    // ─────────────────────────────────────────────────────────
    /// Switch the active imaging modality tab
    SwitchModality(Modality),

    /// Toggle between the diagnostic screen and the about screen
    ToggleAbout,

    /// Drop the loaded image and all derived state
    ClearImage,

    // ─────────────────────────────────────────────────────────
    // File Picker Messages
    // ─────────────────────────────────────────────────────────
    /// Open the file picker overlay
    OpenPicker,

    /// Close the picker without choosing a file
    ClosePicker,

    /// Background directory scan finished
    DirScanned { dir: PathBuf, entries: Vec<PathBuf> },

    /// Background directory scan failed
    DirScanFailed { error: String },

    /// A file was chosen in the picker (or passed on the command line)
    FileChosen { path: PathBuf },

    // ─────────────────────────────────────────────────────────
    // Image Loading Messages
    // ─────────────────────────────────────────────────────────
    /// Validation and decoding succeeded
    ImageLoaded { image: LoadedImage },

    /// Validation or decoding failed (user-displayable message)
    ImageLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Analysis Messages
    // ─────────────────────────────────────────────────────────
    /// An analysis call completed
    AnalysisCompleted {
        request_id: RequestId,
        result: Box<DiagnosticResult>,
        metadata: ModelMetadata,
    },

    /// An analysis call failed (reserved for real backends)
    AnalysisFailed { request_id: RequestId, error: String },
}
