//! End-to-end flow tests: picker -> load -> analyze -> applied result,
//! driven through the real message loop with spawned tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use leafscan_app::{process_message, AppState, Message, StubAnalyzer, UiMode};
use leafscan_core::Modality;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn instant_analyzer() -> Arc<StubAnalyzer> {
    Arc::new(StubAnalyzer::new(Duration::from_millis(0)))
}

fn write_png(dir: &std::path::Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut contents = PNG_HEADER.to_vec();
    contents.extend_from_slice(&[0u8; 32]);
    std::fs::write(&path, contents).unwrap();
    path
}

async fn pump(
    state: &mut AppState,
    rx: &mut mpsc::Receiver<Message>,
    tx: &mpsc::Sender<Message>,
    analyzer: &Arc<StubAnalyzer>,
) {
    let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("task reported back in time")
        .expect("channel open");
    process_message(state, msg, tx, analyzer);
}

#[tokio::test]
async fn test_full_upload_and_analysis_flow() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "leaf.png");
    write_png(dir.path(), "stem.png");

    let (tx, mut rx) = mpsc::channel(16);
    let analyzer = instant_analyzer();
    let mut state = AppState::new(dir.path().to_path_buf());

    // Open the picker; the scan task reports the listing.
    process_message(&mut state, Message::OpenPicker, &tx, &analyzer);
    assert_eq!(state.ui_mode, UiMode::FilePicker);
    pump(&mut state, &mut rx, &tx, &analyzer).await;
    assert_eq!(state.picker.entries.len(), 2);

    // Choose the highlighted file; load task then analysis task complete.
    let chosen = state.picker.selected_path().unwrap().to_path_buf();
    process_message(&mut state, Message::FileChosen { path: chosen }, &tx, &analyzer);
    pump(&mut state, &mut rx, &tx, &analyzer).await; // ImageLoaded
    assert!(state.analyzing);
    pump(&mut state, &mut rx, &tx, &analyzer).await; // AnalysisCompleted

    assert!(!state.analyzing);
    let result = state.result.as_ref().expect("exactly one result applied");
    assert_eq!(result.disease_id, "Tomato_Early_Blight");
    assert_eq!(result.confidence.unwrap().percent, 92);
    assert!(state.model_info.is_some());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_rejected_file_keeps_ui_interactive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"plain text").unwrap();

    let (tx, mut rx) = mpsc::channel(16);
    let analyzer = instant_analyzer();
    let mut state = AppState::new(dir.path().to_path_buf());

    process_message(&mut state, Message::FileChosen { path }, &tx, &analyzer);
    pump(&mut state, &mut rx, &tx, &analyzer).await; // ImageLoadFailed

    assert!(state.error.as_deref().unwrap().contains("Not an image file"));
    assert!(state.image.is_none());
    assert!(!state.analyzing);

    // Retry with a valid file succeeds.
    let good = write_png(dir.path(), "leaf.png");
    process_message(&mut state, Message::FileChosen { path: good }, &tx, &analyzer);
    pump(&mut state, &mut rx, &tx, &analyzer).await; // ImageLoaded
    pump(&mut state, &mut rx, &tx, &analyzer).await; // AnalysisCompleted
    assert!(state.result.is_some());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_tab_switch_during_flight_applies_only_latest_modality() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "leaf.png");

    let (tx, mut rx) = mpsc::channel(16);
    let analyzer = instant_analyzer();
    let mut state = AppState::new(dir.path().to_path_buf());

    process_message(&mut state, Message::FileChosen { path }, &tx, &analyzer);
    pump(&mut state, &mut rx, &tx, &analyzer).await; // ImageLoaded, visible analysis in flight

    // Switch tabs before the visible result lands.
    process_message(
        &mut state,
        Message::SwitchModality(Modality::Infrared),
        &tx,
        &analyzer,
    );

    // Both completions arrive in whatever order the runtime produced them.
    pump(&mut state, &mut rx, &tx, &analyzer).await;
    pump(&mut state, &mut rx, &tx, &analyzer).await;

    assert!(!state.analyzing);
    let result = state.result.as_ref().expect("latest result applied");
    assert!(
        result.thermal.is_some(),
        "only the infrared result may be displayed after the tab switch"
    );
    assert!(result.thermal.as_ref().unwrap().early_detection);
}
