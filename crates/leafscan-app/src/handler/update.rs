//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{keys::handle_key, Task, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.analyzing {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Diagnostic Screen Messages
        // ─────────────────────────────────────────────────────────
        Message::SwitchModality(modality) => {
            if modality == state.modality {
                return UpdateResult::none();
            }
            state.modality = modality;
            // No image loaded: the tab switch alone, no analysis call.
            if state.image.is_none() {
                return UpdateResult::none();
            }
            dispatch_analysis(state)
        }

        Message::ToggleAbout => {
            // Mutually exclusive screens; diagnostic state is untouched.
            state.ui_mode = match state.ui_mode {
                UiMode::About => UiMode::Diagnostic,
                _ => UiMode::About,
            };
            UpdateResult::none()
        }

        Message::ClearImage => {
            state.clear_image();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // File Picker Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenPicker => {
            state.ui_mode = UiMode::FilePicker;
            let dir = state.pick_root.clone();
            state.picker.begin_scan(&dir);
            UpdateResult::action(UpdateAction::SpawnTask(Task::ScanDirectory { dir }))
        }

        Message::ClosePicker => {
            state.ui_mode = UiMode::Diagnostic;
            UpdateResult::none()
        }

        Message::DirScanned { dir, entries } => {
            // A stale scan for a directory the picker already left is dropped.
            if state.picker.dir != dir {
                return UpdateResult::none();
            }
            state.picker.finish_scan(entries);
            UpdateResult::none()
        }

        Message::DirScanFailed { error } => {
            state.picker.loading = false;
            state.error = Some(error);
            state.ui_mode = UiMode::Diagnostic;
            UpdateResult::none()
        }

        Message::FileChosen { path } => {
            state.ui_mode = UiMode::Diagnostic;
            UpdateResult::action(UpdateAction::SpawnTask(Task::LoadImage { path }))
        }

        // ─────────────────────────────────────────────────────────
        // Image Loading Messages
        // ─────────────────────────────────────────────────────────
        Message::ImageLoaded { image } => {
            debug!(path = %image.path.display(), "image accepted");
            state.image = Some(image);
            dispatch_analysis(state)
        }

        Message::ImageLoadFailed { error } => {
            // Prior displayed result stays; only the error banner changes.
            state.error = Some(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis Messages
        // ─────────────────────────────────────────────────────────
        Message::AnalysisCompleted {
            request_id,
            result,
            metadata,
        } => {
            if !state.is_latest_request(request_id) {
                warn!(request_id, "discarding stale analysis result");
                return UpdateResult::none();
            }
            state.analyzing = false;
            state.result = Some(*result);
            state.model_info = Some(metadata);
            UpdateResult::none()
        }

        Message::AnalysisFailed { request_id, error } => {
            if !state.is_latest_request(request_id) {
                warn!(request_id, "discarding stale analysis failure");
                return UpdateResult::none();
            }
            state.analyzing = false;
            state.error = Some(error);
            UpdateResult::none()
        }
    }
}

/// Start an analysis for the loaded image and active modality.
///
/// Issues a fresh request id so any earlier in-flight call becomes stale.
fn dispatch_analysis(state: &mut AppState) -> UpdateResult {
    let Some(image) = state.image.clone() else {
        return UpdateResult::none();
    };
    let request_id = state.next_request_id();
    state.begin_analysis();
    UpdateResult::action(UpdateAction::SpawnTask(Task::Analyze {
        request_id,
        image,
        modality: state.modality,
    }))
}
