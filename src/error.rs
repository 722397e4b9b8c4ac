use std::path::PathBuf;

use thiserror::Error;

/// Result type used at the editor's I/O boundaries.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors produced while loading or saving editor files.
///
/// Editing operations themselves never fail; they clamp their input instead.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{context}: {} ({source})", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("subtitle parse error at line {line}: {reason}")]
    Subtitle { line: usize, reason: String },
}

impl EditorError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
