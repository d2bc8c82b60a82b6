//! Action handlers: background task spawning
//!
//! Each task runs on the tokio runtime and reports its outcome as a message
//! over the mpsc channel; nothing here touches `AppState`.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::analyzer::Analyzer;
use crate::handler::Task;
use crate::image;
use crate::message::Message;

/// Execute a task by spawning it onto the runtime.
pub fn handle_action<A>(task: Task, msg_tx: mpsc::Sender<Message>, analyzer: Arc<A>)
where
    A: Analyzer + Send + Sync + 'static,
{
    tokio::spawn(async move {
        execute_task(task, msg_tx, analyzer).await;
    });
}

async fn execute_task<A>(task: Task, msg_tx: mpsc::Sender<Message>, analyzer: Arc<A>)
where
    A: Analyzer + Send + Sync + 'static,
{
    match task {
        Task::ScanDirectory { dir } => {
            let msg = match scan_directory(&dir).await {
                Ok(entries) => {
                    debug!(dir = %dir.display(), count = entries.len(), "picker scan complete");
                    Message::DirScanned { dir, entries }
                }
                Err(e) => {
                    error!(dir = %dir.display(), "picker scan failed: {e}");
                    Message::DirScanFailed {
                        error: format!("Cannot list {}: {e}", dir.display()),
                    }
                }
            };
            let _ = msg_tx.send(msg).await;
        }

        Task::LoadImage { path } => {
            let msg = match image::load_image(&path).await {
                Ok(image) => Message::ImageLoaded { image },
                Err(e) => {
                    debug!(path = %path.display(), "image rejected: {e}");
                    Message::ImageLoadFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = msg_tx.send(msg).await;
        }

        Task::Analyze {
            request_id,
            image,
            modality,
        } => {
            let msg = match analyzer.analyze(&image, modality).await {
                Ok((result, metadata)) => Message::AnalysisCompleted {
                    request_id,
                    result: Box::new(result),
                    metadata,
                },
                Err(e) => {
                    error!(request_id, "analysis failed: {e}");
                    Message::AnalysisFailed {
                        request_id,
                        error: e.to_string(),
                    }
                }
            };
            let _ = msg_tx.send(msg).await;
        }
    }
}

/// List candidate image files of a directory, sorted by file name.
async fn scan_directory(dir: &std::path::Path) -> std::io::Result<Vec<PathBuf>> {
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && image::has_image_extension(&path) {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::StubAnalyzer;
    use std::time::Duration;

    #[tokio::test]
    async fn test_scan_directory_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt", "c.webp"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("subdir.png")).unwrap();

        let entries = scan_directory(dir.path()).await.unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.webp"]);
    }

    #[tokio::test]
    async fn test_load_task_reports_rejection_over_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"not an image").unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let analyzer = Arc::new(StubAnalyzer::new(Duration::from_millis(0)));
        execute_task(Task::LoadImage { path }, tx, analyzer).await;

        match rx.recv().await.unwrap() {
            Message::ImageLoadFailed { error } => assert!(error.contains("Not an image file")),
            other => panic!("expected ImageLoadFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_analyze_task_reports_completion_over_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let analyzer = Arc::new(StubAnalyzer::new(Duration::from_millis(0)));
        let image = crate::image::LoadedImage {
            path: PathBuf::from("leaf.png"),
            mime: "image/png",
            byte_len: 1,
            data: "AA==".to_string(),
        };

        execute_task(
            Task::Analyze {
                request_id: 7,
                image,
                modality: leafscan_core::Modality::Infrared,
            },
            tx,
            analyzer,
        )
        .await;

        match rx.recv().await.unwrap() {
            Message::AnalysisCompleted {
                request_id, result, ..
            } => {
                assert_eq!(request_id, 7);
                assert!(result.thermal.is_some());
            }
            other => panic!("expected AnalysisCompleted, got {other:?}"),
        }
    }
}
