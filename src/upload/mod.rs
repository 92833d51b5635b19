mod dispatcher;
pub mod types;

pub use dispatcher::UploadDispatcher;
pub use types::{
    CompletedAttempt, SelectedFile, UploadError, FAILURE_MESSAGE, NO_FILE_MESSAGE,
    READ_FAILURE_MESSAGE,
};
