//! Message processing loop (TEA pattern)

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::analyzer::Analyzer;
use crate::message::Message;
use crate::state::AppState;
use crate::{handler, UpdateAction};

/// Process a message through the TEA update function.
///
/// Follow-up messages are chained until the update settles; actions are
/// handed off to [`handle_action`] which spawns background tasks reporting
/// back over `msg_tx`. The state is only ever touched here, so there is a
/// single logical writer.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    analyzer: &Arc<A>,
) where
    A: Analyzer + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            match action {
                UpdateAction::SpawnTask(task) => {
                    handle_action(task, msg_tx.clone(), Arc::clone(analyzer));
                }
            }
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
