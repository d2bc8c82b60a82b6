//! Main event loop: terminal lifecycle, input thread, message pump.

use std::sync::Arc;

use tokio::sync::mpsc;

use leafscan_app::message::Message;
use leafscan_app::{process_message, Analyzer, AppState};
use leafscan_core::prelude::*;

use crate::theme::IconSet;
use crate::{event, render, terminal};

const MESSAGE_CHANNEL_SIZE: usize = 64;

/// Run the UI until the user quits.
///
/// `initial` is processed before the first frame, which lets the binary
/// preload an image passed on the command line.
pub async fn run<A>(
    mut state: AppState,
    analyzer: Arc<A>,
    icons: IconSet,
    initial: Option<Message>,
) -> Result<()>
where
    A: Analyzer + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term =
        ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_SIZE);

    // Crossterm polling is blocking, so input runs on its own thread and
    // feeds the same channel background tasks report on. Poll timeouts
    // double as ticks for the spinner.
    let input_tx = msg_tx.clone();
    std::thread::spawn(move || loop {
        match event::poll() {
            Ok(Some(message)) => {
                if input_tx.blocking_send(message).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                error!("input polling failed: {e}");
                break;
            }
        }
    });

    if let Some(message) = initial {
        process_message(&mut state, message, &msg_tx, &analyzer);
    }

    info!("event loop started");
    loop {
        term.draw(|frame| render::view(frame, &state, icons))?;

        let Some(message) = msg_rx.recv().await else {
            // Input thread gone with our sender still alive: unrecoverable.
            ratatui::restore();
            return Err(Error::ChannelClosed);
        };
        process_message(&mut state, message, &msg_tx, &analyzer);

        if state.is_quitting() {
            break;
        }
    }

    ratatui::restore();
    info!("event loop stopped");
    Ok(())
}
