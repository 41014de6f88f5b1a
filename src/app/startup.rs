//! Application startup: argument parsing, logging setup and the single
//! version-configuration pass.

use crate::app::cli::args::Args;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{init_logging, reconfigure_logging};
use crate::core::version::project_version;
use crate::reader::{configure_version, BuildConfig};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Initialize application startup and run the version read.
///
/// Exits the process: 0 on success (or a lenient-policy miss), 1 when the
/// version is unavailable under the strict policy.
pub fn startup() {
    let mut args = Args::parse();
    let use_color = args.use_color();

    // Logging comes up before the config file is read so that config errors
    // are reported properly; the level is adjusted afterwards if the file
    // changed it.
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.effective_log_file()
            .map(|p| p.to_string_lossy().to_string())
            .as_deref(),
        use_color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        std::process::exit(1);
    }

    log::debug!("projver {} starting", project_version());

    let config_file = args.config_file.take();
    Args::parse_config_file(&mut args, config_file);

    if let Err(e) = reconfigure_logging(args.log_level.as_deref()) {
        log::warn!("Could not apply configured log level: {}", e);
    }

    let root_dir = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let policy = args.effective_policy();
    log::debug!(
        "Configuring version from {} with policy {:?}",
        root_dir.display(),
        policy
    );

    let mut build_config = BuildConfig::new();
    match configure_version(&mut build_config, &root_dir, policy) {
        Ok(()) => {
            if let Some(version) = build_config.version {
                // Emit exactly what the file contained, no added newline
                print!("{}", version);
                let _ = std::io::stdout().flush();
            }
        }
        Err(e) => {
            log_error_with_context(&e, "Version configuration failed");
            std::process::exit(1);
        }
    }
}
