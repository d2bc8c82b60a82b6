//! Key event handlers for UI modes

use leafscan_core::Modality;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Translate a key press into a follow-up message for the current UI mode.
///
/// Picker navigation mutates picker state directly; everything else is
/// expressed as a message so the update function stays the single place
/// where diagnostic state changes.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from any mode.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Diagnostic => handle_diagnostic_key(state, key),
        UiMode::FilePicker => handle_picker_key(state, key),
        UiMode::About => handle_about_key(key),
    }
}

fn handle_diagnostic_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('a') => Some(Message::ToggleAbout),
        InputKey::Char('o') => Some(Message::OpenPicker),
        InputKey::Char('c') if state.image.is_some() => Some(Message::ClearImage),
        InputKey::Char('v') => Some(Message::SwitchModality(Modality::Visible)),
        InputKey::Char('i') => Some(Message::SwitchModality(Modality::Infrared)),
        InputKey::Tab | InputKey::BackTab => {
            Some(Message::SwitchModality(state.modality.toggled()))
        }
        _ => None,
    }
}

fn handle_picker_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::ClosePicker),
        InputKey::Up | InputKey::Char('k') => {
            state.picker.select_previous();
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            state.picker.select_next();
            None
        }
        InputKey::Home => {
            state.picker.selected = 0;
            None
        }
        InputKey::End => {
            state.picker.selected = state.picker.entries.len().saturating_sub(1);
            None
        }
        InputKey::Enter => state
            .picker
            .selected_path()
            .map(|path| Message::FileChosen {
                path: path.to_path_buf(),
            }),
        _ => None,
    }
}

fn handle_about_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('a') | InputKey::Esc | InputKey::Enter => Some(Message::ToggleAbout),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
