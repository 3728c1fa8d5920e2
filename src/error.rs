use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BypasshError>;

#[derive(Debug, Error)]
pub enum BypasshError {
    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot locate executable directory")]
    ExeDir,

    #[error("error exec start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("error exec wait: {0}")]
    Wait(std::io::Error),

    #[error("cannot create async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
