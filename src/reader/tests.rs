//! Tests for the version reader module

use super::*;
use std::io::Write;
use tempfile::TempDir;

fn root_with_version(contents: &[u8]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let mut file = std::fs::File::create(dir.path().join(VERSION_FILE_NAME)).unwrap();
    file.write_all(contents).unwrap();
    dir
}

#[test]
fn test_read_returns_file_contents_verbatim() {
    let dir = root_with_version(b"1.2.3");
    assert_eq!(read_project_version(dir.path()).unwrap(), "1.2.3");
}

#[test]
fn test_read_preserves_trailing_newline() {
    // No trimming or normalization of any kind
    let dir = root_with_version(b"1.2.3\n");
    assert_eq!(read_project_version(dir.path()).unwrap(), "1.2.3\n");
}

#[test]
fn test_read_preserves_whitespace_and_unicode() {
    let dir = root_with_version("  2.0.0-rc.1 \u{00e9}\n\n".as_bytes());
    assert_eq!(
        read_project_version(dir.path()).unwrap(),
        "  2.0.0-rc.1 \u{00e9}\n\n"
    );
}

#[test]
fn test_read_no_format_validation() {
    // Anything UTF-8 is acceptable, it need not look like a version at all
    let dir = root_with_version(b"not a version string");
    assert_eq!(
        read_project_version(dir.path()).unwrap(),
        "not a version string"
    );
}

#[test]
fn test_read_empty_file() {
    let dir = root_with_version(b"");
    assert_eq!(read_project_version(dir.path()).unwrap(), "");
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_project_version(dir.path()).unwrap_err();
    assert!(matches!(err, VersionError::NotFound { .. }));
    assert_eq!(err.path(), dir.path().join(VERSION_FILE_NAME));
}

#[test]
fn test_missing_root_dir_is_not_found() {
    // Root existence is not validated separately, the lookup just fails
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("no-such-subdir");
    let err = read_project_version(&gone).unwrap_err();
    assert!(matches!(err, VersionError::NotFound { .. }));
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let dir = root_with_version(&[0x31, 0x2e, 0xff, 0xfe]);
    let err = read_project_version(dir.path()).unwrap_err();
    assert!(matches!(err, VersionError::InvalidEncoding { .. }));
}

#[test]
fn test_configure_version_sets_slot() {
    let dir = root_with_version(b"1.2.3\n");
    let mut config = BuildConfig::new();

    configure_version(&mut config, dir.path(), FailurePolicy::Strict).unwrap();
    assert_eq!(config.version.as_deref(), Some("1.2.3\n"));
}

#[test]
fn test_configure_version_strict_propagates_failure() {
    let dir = TempDir::new().unwrap();
    let mut config = BuildConfig::new();

    let result = configure_version(&mut config, dir.path(), FailurePolicy::Strict);
    assert!(matches!(result, Err(VersionError::NotFound { .. })));
    assert_eq!(config.version, None);
}

#[test]
fn test_configure_version_lenient_keeps_prior_value() {
    let dir = TempDir::new().unwrap();
    let mut config = BuildConfig {
        version: Some("0.9.9".to_string()),
    };

    // Lenient policy swallows the failure and leaves the slot untouched
    configure_version(&mut config, dir.path(), FailurePolicy::Lenient).unwrap();
    assert_eq!(config.version.as_deref(), Some("0.9.9"));
}

#[test]
fn test_configure_version_lenient_leaves_slot_unset() {
    let dir = TempDir::new().unwrap();
    let mut config = BuildConfig::new();

    configure_version(&mut config, dir.path(), FailurePolicy::Lenient).unwrap();
    assert_eq!(config.version, None);
}

#[test]
fn test_configure_version_invalid_utf8_fails_strict() {
    let dir = root_with_version(&[0x80, 0x80]);
    let mut config = BuildConfig::new();

    let result = configure_version(&mut config, dir.path(), FailurePolicy::Strict);
    assert!(matches!(result, Err(VersionError::InvalidEncoding { .. })));
    assert_eq!(config.version, None);
}

#[test]
fn test_configure_version_invalid_utf8_warns_lenient() {
    let dir = root_with_version(&[0x80, 0x80]);
    let mut config = BuildConfig::new();

    configure_version(&mut config, dir.path(), FailurePolicy::Lenient).unwrap();
    assert_eq!(config.version, None);
}

#[test]
fn test_default_policy_is_strict() {
    assert_eq!(FailurePolicy::default(), FailurePolicy::Strict);
}

#[test]
fn test_error_display_names_the_path() {
    let dir = TempDir::new().unwrap();
    let err = read_project_version(dir.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("not found"));
    assert!(msg.contains(VERSION_FILE_NAME));
}
