use std::path::PathBuf;

use crate::ProcessId;

/// Result type for every window and process operation.
pub type WindowResult<T> = Result<T, WindowError>;

/// Coarse classification of a [`WindowError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A first-match lookup had nothing to take the first element of.
    OutOfRange,
    /// A native call failed; the OS error is carried unchanged.
    Platform,
    /// The configuration file could not be read or parsed.
    Config,
}

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("no running process named {exe:?}")]
    NoMatchingProcess { exe: String },

    #[error("process {pid} has no visible window with a title")]
    NoMatchingWindow { pid: ProcessId },

    #[error(transparent)]
    Platform(Box<dyn std::error::Error + Send + Sync>),

    #[error("{}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl WindowError {
    /// Wraps a native-call failure without translating it.
    pub fn platform(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Platform(Box::new(err))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoMatchingProcess { .. } | Self::NoMatchingWindow { .. } => ErrorKind::OutOfRange,
            Self::Platform(_) => ErrorKind::Platform,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }
}
