use crate::process::ProcessId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type returned by every accessor operation
pub type AccessResult<T> = Result<T, AccessError>;

/// Operations the accessor deliberately does not perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedOperation {
    /// The tool is already running and attaching to or focusing it is not implemented
    AttachToRunningInstance { pid: ProcessId },
    /// Jumping to a line and column inside the tool
    OpenFileAtLine,
    /// Opening individual source files inside the tool
    OpenFiles,
    /// Adding source files to the tool's project
    AddFiles,
    /// Asking the tool to save its open documents
    SaveAllOpenDocuments,
}

impl std::fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedOperation::AttachToRunningInstance { pid } => {
                write!(f, "attaching to the running instance (PID {pid})")
            }
            UnsupportedOperation::OpenFileAtLine => write!(f, "opening a file at a line"),
            UnsupportedOperation::OpenFiles => write!(f, "opening source files"),
            UnsupportedOperation::AddFiles => write!(f, "adding source files"),
            UnsupportedOperation::SaveAllOpenDocuments => write!(f, "saving open documents"),
        }
    }
}

/// Error types for external tool access
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("External tool not found under {}", root.display())]
    ToolNotFound { root: PathBuf },

    #[error("Failed to launch {}", executable.display())]
    SpawnFailed { executable: PathBuf },

    #[error("Not supported: {0}")]
    Unsupported(UnsupportedOperation),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AccessError {
    /// Check if the operation may succeed when tried again later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AccessError::ToolNotFound { .. } | AccessError::SpawnFailed { .. }
        )
    }

    /// Check if this error indicates the operation will never succeed as configured
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            AccessError::Unsupported(_) | AccessError::Configuration(_)
        )
    }

    /// The unsupported operation, if this is an `Unsupported` error
    pub fn unsupported_operation(&self) -> Option<UnsupportedOperation> {
        match self {
            AccessError::Unsupported(op) => Some(*op),
            _ => None,
        }
    }
}
