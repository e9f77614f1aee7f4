//! Value parsers for CLI arguments.
//!
//! These run at parse time so invalid arguments are rejected with a
//! specific message before any configuration is loaded.

use std::path::PathBuf;

/// Validates that the configuration file exists and is a TOML file.
pub fn validate_config_file_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: {}", value));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: {}", value));
    }

    if path.extension().and_then(|e| e.to_str()) != Some("toml") {
        return Err(format!("Configuration file must be a .toml file: {}", value));
    }

    Ok(path)
}

/// Validates the server host address.
///
/// Accepts 'localhost' or anything that parses as an IP address.
pub fn validate_host_address(value: &str) -> Result<String, String> {
    if value == "localhost" {
        return Ok(value.to_string());
    }

    value
        .parse::<std::net::IpAddr>()
        .map(|_| value.to_string())
        .map_err(|_| {
            format!(
                "Invalid host address '{}'. Use 'localhost' or a valid IP address",
                value
            )
        })
}

/// Validates the server port.
pub fn validate_port(value: &str) -> Result<u16, String> {
    let port: u16 = value
        .parse()
        .map_err(|_| format!("Port must be a number between 1 and 65535, got '{}'", value))?;

    if port == 0 {
        return Err("Port must be between 1 and 65535".to_string());
    }

    Ok(port)
}

/// Validates the number of migration rollback steps.
pub fn validate_rollback_steps(value: &str) -> Result<u32, String> {
    let steps: u32 = value
        .parse()
        .map_err(|_| format!("Rollback steps must be a number, got '{}'", value))?;

    if !(1..=100).contains(&steps) {
        return Err("Rollback steps must be between 1 and 100".to_string());
    }

    Ok(steps)
}
