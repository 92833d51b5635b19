use crate::upload::{CompletedAttempt, SelectedFile, UploadError, READ_FAILURE_MESSAGE};
use std::path::Path;
use tracing::{debug, info, warn};

/// The window's transient state: the picked file and the status line.
///
/// Attempts are numbered when triggered. An outcome is only applied if it is
/// newer than the last one applied, so a slow early request can never
/// overwrite the result of a later one.
#[derive(Default)]
pub struct SelectionState {
    selected_file: Option<SelectedFile>,
    status_message: String,
    produced_files: Vec<String>,
    next_attempt: u64,
    last_applied: u64,
}

impl SelectionState {
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn set_selected_file(&mut self, file: Option<SelectedFile>) {
        self.selected_file = file;
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.status_message = text.into();
    }

    pub fn produced_files(&self) -> &[String] {
        &self.produced_files
    }

    pub fn begin_attempt(&mut self) -> u64 {
        self.next_attempt += 1;
        self.next_attempt
    }

    /// Records a trigger that was rejected before any request was made.
    pub fn reject_missing_file(&mut self) {
        self.show_local_notice(UploadError::NoFileSelected.status_message());
    }

    /// Reads `path` and makes it the selection. A failed read keeps the
    /// previous selection and ranks the notice like a completed attempt.
    pub fn select_path(&mut self, path: &Path) {
        match SelectedFile::from_path(path) {
            Ok(file) => {
                info!(file = %file.name, mime = %file.mime_type, size = file.size(), "File selected");
                self.set_selected_file(Some(file));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read selected file");
                self.show_local_notice(READ_FAILURE_MESSAGE);
            }
        }
    }

    fn show_local_notice(&mut self, text: &str) {
        let attempt = self.begin_attempt();
        self.last_applied = attempt;
        self.produced_files.clear();
        self.set_status_message(text);
    }

    /// Returns `false` when the outcome was discarded as stale.
    pub fn apply(&mut self, completed: CompletedAttempt) -> bool {
        if completed.attempt <= self.last_applied {
            debug!(
                attempt = completed.attempt,
                last_applied = self.last_applied,
                "Discarding stale upload outcome"
            );
            return false;
        }
        self.last_applied = completed.attempt;

        match completed.outcome {
            Ok(reply) => {
                info!(
                    attempt = completed.attempt,
                    file = %completed.file_name,
                    "Upload finished"
                );
                self.set_status_message(reply.status_message());
                self.produced_files = reply.files;
            }
            Err(e) => {
                warn!(
                    attempt = completed.attempt,
                    file = %completed.file_name,
                    error = %e,
                    "Upload failed"
                );
                self.set_status_message(e.status_message());
                self.produced_files.clear();
            }
        }
        true
    }
}
