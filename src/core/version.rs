//! Build metadata accessors.
//! Includes the generated version.rs from the build script into a core
//! module, providing a single source of truth.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Version of this tool itself, read from its own `version` file at build time
pub fn project_version() -> &'static str {
    PROJECT_VERSION
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}
