//! The single read-decode step: `version` file bytes to a String

use super::error::{VersionError, VersionResult};
use std::path::Path;

/// Name of the version file expected at the project root
pub const VERSION_FILE_NAME: &str = "version";

/// Read `root_dir/version` and decode it as UTF-8.
///
/// Returns the file contents exactly as found. A trailing newline is
/// preserved; the string is not required to be semver or any other format.
/// The existence of `root_dir` itself is not checked separately - a missing
/// directory surfaces as a missing version file.
pub fn read_project_version(root_dir: &Path) -> VersionResult<String> {
    let path = root_dir.join(VERSION_FILE_NAME);

    let bytes = std::fs::read(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            VersionError::NotFound { path: path.clone() }
        } else {
            VersionError::Unreadable {
                path: path.clone(),
                source,
            }
        }
    })?;

    String::from_utf8(bytes).map_err(|source| VersionError::InvalidEncoding { path, source })
}
