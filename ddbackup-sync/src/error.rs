use std::path::PathBuf;
use thiserror::Error;

use ddbackup_http::HttpError;

#[derive(Error, Debug)]
pub enum SyncError {
    /// Invalid engine setup, raised before any operation runs
    #[error("Setup error: {0}")]
    Setup(String),

    #[error("I/O error on {}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {kind} file: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to encode {kind} elements: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Remote error: {0}")]
    Remote(#[from] HttpError),

    #[error("{kind} adapter cannot handle a {found} payload")]
    UnexpectedPayload {
        kind: &'static str,
        found: &'static str,
    },

    #[error("{action} failed for {kind}: {source}")]
    Adapter {
        action: &'static str,
        kind: &'static str,
        #[source]
        source: Box<SyncError>,
    },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::FileIo {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
