//! Tests for the CLI module
//!
//! Argument parsing and config merging tests, extracted from the individual
//! modules for better organization.
