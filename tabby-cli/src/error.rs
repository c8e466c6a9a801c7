//! CLI error types.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("event script clicks unknown element {0:?}")]
    UnknownTarget(String),

    #[error("runtime stopped before the script finished")]
    RuntimeStopped,

    #[error("runtime task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
