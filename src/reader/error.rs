//! Version Reader Error Types

use crate::core::error_handling::ContextualError;
use std::path::PathBuf;

/// All the ways a project version can be unavailable: the `version` file is
/// missing, cannot be read, or does not decode as UTF-8.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("Version file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Unable to read version file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version file {path} is not valid UTF-8")]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl VersionError {
    /// Path of the version file the failure refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            VersionError::NotFound { path }
            | VersionError::Unreadable { path, .. }
            | VersionError::InvalidEncoding { path, .. } => path,
        }
    }
}

impl ContextualError for VersionError {
    fn is_user_actionable(&self) -> bool {
        // A missing or mis-encoded file has an obvious fix the user can
        // make; read failures are system problems.
        matches!(
            self,
            VersionError::NotFound { .. } | VersionError::InvalidEncoding { .. }
        )
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            VersionError::NotFound { .. } => Some(
                "No version file found at the project root. \
                 Create a file named 'version' containing the version identifier.",
            ),
            VersionError::InvalidEncoding { .. } => {
                Some("The version file is not valid UTF-8. Re-save it as UTF-8 text.")
            }
            VersionError::Unreadable { .. } => None,
        }
    }
}

/// Result type for version reading operations
pub type VersionResult<T> = Result<T, VersionError>;
