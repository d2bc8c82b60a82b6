//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use leafscan_core::Modality;

use crate::analyzer::RequestId;
use crate::image::LoadedImage;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Background tasks to spawn
#[derive(Debug, Clone)]
pub enum Task {
    /// List image files of a directory for the picker
    ScanDirectory { dir: PathBuf },

    /// Validate, read, and encode an image file
    LoadImage { path: PathBuf },

    /// Run one analysis over the loaded image
    Analyze {
        request_id: RequestId,
        image: LoadedImage,
        modality: Modality,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
