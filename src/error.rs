//! Error types for mp4tagcopy

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mp4tagcopy
#[derive(Debug, Error)]
pub enum TagCopyError {
    #[error("Invalid arguments: {0}")]
    Argument(String),

    #[error("can't open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[error("the file {} has an invalid file handle: {reason}", path.display())]
    InvalidHandle { path: PathBuf, reason: String },

    #[error("different content IDs: {source_id} != {target_id}")]
    ContentIdMismatch { source_id: u32, target_id: u32 },

    #[error("the file {} has no content ID", .0.display())]
    MissingContentId(PathBuf),

    #[error("the file {} is opened read-only", .0.display())]
    ReadOnlyHandle(PathBuf),

    #[error("failed to write tags to {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagCopyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage text should accompany this error
    pub fn wants_usage(&self) -> bool {
        matches!(self, TagCopyError::Argument(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagCopyError::Open { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the path exists and is a regular file\n\
                    • Only MP4 containers (.mp4, .m4a, .m4v, .m4b) are supported",
                    self
                )
            }
            TagCopyError::ContentIdMismatch { .. } => {
                format!(
                    "{}\n\n\
                    The files were left unchanged.\n\
                    Run without --compare to copy the tags anyway.",
                    self
                )
            }
            TagCopyError::MissingContentId(_) => {
                format!(
                    "{}\n\n\
                    --compare needs a content ID (cnID) in both files.\n\
                    Run without --compare to copy the tags anyway.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagCopyError
pub type Result<T> = std::result::Result<T, TagCopyError>;
