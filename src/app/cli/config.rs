//! TOML configuration file parsing and loading
//!
//! Handles loading and parsing of TOML configuration files, including
//! default config file discovery. Config values only fill in settings the
//! command line left unspecified.

use std::path::PathBuf;

use super::args::Args;

impl Args {
    /// Load the config file (explicit or discovered) and apply its values.
    ///
    /// An explicitly named file must exist; the default location
    /// (`<config_dir>/Projver/projver.toml`) is silently skipped when absent.
    /// Returns the raw table for callers that want to inspect it.
    pub fn parse_config_file(
        args: &mut Self,
        config_file: Option<PathBuf>,
    ) -> Option<toml::Table> {
        let config_path = match config_file {
            Some(path) => {
                if !path.exists() {
                    eprintln!(
                        "Error: The specified configuration file does not exist: {}",
                        path.display()
                    );
                    std::process::exit(1);
                }
                Some(path)
            }
            None => {
                let default_path =
                    dirs::config_dir().map(|d| d.join("Projver").join("projver.toml"));
                match default_path {
                    Some(path) if path.exists() => Some(path),
                    _ => None,
                }
            }
        };

        let path = config_path?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<toml::Table>(&contents) {
                Ok(config) => {
                    Self::apply_toml_values(args, &config);
                    Some(config)
                }
                Err(e) => {
                    eprintln!("Error parsing configuration file {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error reading configuration file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Apply TOML configuration values to Args. Command-line values take
    /// precedence, so only unset fields are filled in.
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) {
        if args.root.is_none() {
            if let Some(root) = config.get("root").and_then(|v| v.as_str()) {
                args.root = Some(PathBuf::from(root));
            }
        }

        // --strict on the command line beats lenient = true in the config
        if let Some(lenient) = config.get("lenient").and_then(|v| v.as_bool()) {
            if !args.strict && !args.lenient {
                args.lenient = lenient;
            }
        }

        if !args.color && !args.no_color {
            if let Some(color) = config.get("color").and_then(|v| v.as_bool()) {
                args.color = color;
                args.no_color = !color;
            } else if let Some(no_color) = config.get("no-color").and_then(|v| v.as_bool()) {
                // Legacy key, inverse of `color`
                args.no_color = no_color;
                args.color = !no_color;
            }
        }

        if args.log_level.is_none() {
            if let Some(log_level) = config.get("log-level").and_then(|v| v.as_str()) {
                args.log_level = Some(log_level.to_string());
            }
        }
        if args.log_file.is_none() {
            if let Some(log_file) = config.get("log-file").and_then(|v| v.as_str()) {
                args.log_file = Some(PathBuf::from(log_file));
            }
        }
        if args.log_format.is_none() {
            if let Some(log_format) = config.get("log-format").and_then(|v| v.as_str()) {
                args.log_format = Some(log_format.to_string());
            }
        }
    }
}
