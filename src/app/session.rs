use super::state::SelectionState;
use crate::upload::{CompletedAttempt, UploadDispatcher};
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::Handle;
use tracing::{debug, info};

/// Runs uploads on the tokio runtime and hands finished attempts back to the
/// UI thread through a channel that is drained once per frame.
///
/// Triggers are not serialized: every call to [`UploadSession::trigger`] with
/// a file selected starts its own request.
pub struct UploadSession {
    dispatcher: UploadDispatcher,
    runtime: Handle,
    sender: Sender<CompletedAttempt>,
    receiver: Receiver<CompletedAttempt>,
}

impl UploadSession {
    pub fn new(dispatcher: UploadDispatcher, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            dispatcher,
            runtime,
            sender,
            receiver,
        }
    }

    /// Returns the attempt number, or `None` if nothing was sent because no
    /// file is selected. `on_complete` runs on the runtime once the outcome
    /// is queued.
    pub fn trigger<F>(&self, state: &mut SelectionState, on_complete: F) -> Option<u64>
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(file) = state.selected_file().cloned() else {
            debug!("Upload requested without a selected file");
            state.reject_missing_file();
            return None;
        };

        let attempt = state.begin_attempt();
        info!(
            attempt,
            file = %file.name,
            size = file.size(),
            endpoint = self.dispatcher.endpoint(),
            "Dispatching upload"
        );

        let dispatcher = self.dispatcher.clone();
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let outcome = dispatcher.send(&file).await;
            sender
                .send(CompletedAttempt {
                    attempt,
                    file_name: file.name,
                    outcome,
                })
                .unwrap_or_default();
            on_complete();
        });

        Some(attempt)
    }

    /// Applies every finished attempt waiting in the channel. Returns how
    /// many of them changed the state.
    pub fn drain(&self, state: &mut SelectionState) -> usize {
        let mut applied = 0;
        while let Ok(completed) = self.receiver.try_recv() {
            if state.apply(completed) {
                applied += 1;
            }
        }
        applied
    }
}
