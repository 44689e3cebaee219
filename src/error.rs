use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid preferences in {}: {message}", path.display())]
    Preferences { path: PathBuf, message: String },
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl TreeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Io {
            path: path.into(),
            source,
        }
    }
    /// Whether this error came from the filesystem rather than from the input itself.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, TreeError::Io { .. })
    }
}
