//! Project version reading
//!
//! Reads a file named `version` at the root of a project tree, decodes it as
//! UTF-8 and exposes the result as the build's version identifier. The file
//! contents are returned exactly as found - no trimming, no format checks.

pub mod build_config;
pub mod error;
pub mod version_file;

pub use build_config::{configure_version, BuildConfig, FailurePolicy};
pub use error::{VersionError, VersionResult};
pub use version_file::{read_project_version, VERSION_FILE_NAME};

#[cfg(test)]
mod tests;
