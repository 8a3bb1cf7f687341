//! Library error type for the shell core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// A file chooser exchange is already outstanding.
    #[error("a file chooser request is already pending (request code {pending})")]
    FileChooserBusy { pending: u32 },

    /// A picker result arrived with no matching outstanding request.
    #[error("no pending file chooser request for request code {0}")]
    NoPendingFileChooser(u32),

    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("instance parameter not passed")]
    MissingInstance,

    #[error("app registration for {instance} failed: {reason}")]
    Registration { instance: String, reason: String },

    #[error("could not open {url}: {reason}")]
    OpenUrl { url: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
