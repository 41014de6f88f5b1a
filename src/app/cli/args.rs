//! Core CLI arguments structure and basic functionality
//!
//! Contains the main Args struct definition and the helpers that turn raw
//! flags into effective settings. Configuration file loading is handled by
//! the config module.

use crate::reader::FailurePolicy;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Arguments structure with all command-line options.
///
/// Values from a TOML configuration file fill in anything the command line
/// left unspecified; explicit flags always win.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "projver")]
#[command(about = "Read the project version from a `version` file at the project root")]
#[command(version = crate::core::version::project_version())]
pub struct Args {
    /// Project root directory containing the `version` file (default: cwd)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Warn and continue when the version file cannot be read
    #[arg(long = "lenient", conflicts_with = "strict")]
    pub lenient: bool,

    /// Fail when the version file cannot be read (overrides config file)
    #[arg(long = "strict", conflicts_with = "lenient")]
    pub strict: bool,

    /// Force color output on
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Force color output off
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub log_format: Option<String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failure policy after flags and config are merged. Strict wins over
    /// lenient; strict is also the default when neither is requested.
    pub fn effective_policy(&self) -> FailurePolicy {
        if self.lenient && !self.strict {
            FailurePolicy::Lenient
        } else {
            FailurePolicy::Strict
        }
    }

    /// Color decision: explicit flags win, otherwise color when stdout is a
    /// terminal.
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else {
            self.color || std::io::stdout().is_terminal()
        }
    }

    /// Log file path with the magic values 'none' and '-' mapped to disabled
    pub fn effective_log_file(&self) -> Option<&std::path::Path> {
        match &self.log_file {
            Some(path) => {
                let raw = path.to_string_lossy();
                if raw.eq_ignore_ascii_case("none") || raw == "-" {
                    None
                } else {
                    Some(path.as_path())
                }
            }
            None => None,
        }
    }
}
