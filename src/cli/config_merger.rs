//! Merges CLI argument overrides into loaded settings.
//!
//! CLI arguments are the highest-priority configuration source, above
//! configuration files and environment variables.

use super::parser::{Cli, Commands};
use crate::config::settings::Settings;

/// Applies CLI overrides onto the loaded settings.
///
/// Precedence within the CLI itself: an explicit `--log-level` on the
/// serve command beats the global `--verbose`/`--quiet` flags.
pub fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    if let Some(Commands::Serve {
        host,
        port,
        log_level,
        dry_run: _,
    }) = &cli.command
    {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
        if let Some(level) = log_level {
            settings.logger.level = level.clone().into();
        }
    }
}
