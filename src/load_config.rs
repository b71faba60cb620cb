/// `load_config` module: loads the static YAML configuration file into the
/// typed [`RawConfig`] the engine validates.
///
/// This module is the only place where untrusted YAML is parsed and mapped
/// to strongly-typed internal structs.
///
/// # Responsibilities
/// - Parse user-supplied YAML configuration files into type-safe Rust structs
/// - Ensure robust error messages for CLI and tests: any failure in loading
///   must result in clear diagnostics.
///
/// # Errors
/// All errors in this module use `anyhow::Error` for context-rich
/// diagnostics, and are surfaced at the CLI boundary. Semantic validation
/// (missing sync section, missing bucket) happens later, in
/// [`RawConfig::into_validated`](crate::config::RawConfig::into_validated).
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::config::RawConfig;

/// Loads a static YAML config file and returns the raw (not yet validated)
/// configuration for use by the CLI.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RawConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let raw: RawConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    Ok(raw)
}
