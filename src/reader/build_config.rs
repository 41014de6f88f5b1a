//! Build configuration state and the version assignment step
//!
//! Downstream build steps read the version out of an explicit `BuildConfig`
//! value rather than a process-wide property, so the configuration routine
//! stays pure and testable.

use super::error::VersionResult;
use super::version_file::read_project_version;
use std::path::Path;

/// What to do when the `version` file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Propagate the failure, aborting build configuration
    #[default]
    Strict,
    /// Log a warning and leave the version at its prior value
    Lenient,
}

/// Build-wide configuration established before any compilation or packaging
/// work begins. Currently holds only the version slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Version identifier for the build, `None` until assigned
    pub version: Option<String>,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Read `root_dir/version` and assign the result to `config.version`.
///
/// Invoked once per build configuration pass. On success the slot is set
/// through this single assignment path. On failure the slot keeps its prior
/// value: under `Strict` the error propagates to the caller, under `Lenient`
/// it is logged as a warning and the build proceeds.
pub fn configure_version(
    config: &mut BuildConfig,
    root_dir: &Path,
    policy: FailurePolicy,
) -> VersionResult<()> {
    match read_project_version(root_dir) {
        Ok(version) => {
            log::info!("Read version {:?} from {}", version, root_dir.display());
            config.version = Some(version);
            Ok(())
        }
        Err(err) => match policy {
            FailurePolicy::Strict => Err(err),
            FailurePolicy::Lenient => {
                log::warn!("Unable to fetch version: {}", err);
                Ok(())
            }
        },
    }
}
