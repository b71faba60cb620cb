//! Error kinds surfaced by the synchronisation engine.
//!
//! All variants are fatal to the current invocation; nothing is retried. The
//! one deliberately non-fatal condition, a configured item whose local path
//! does not exist, is logged and skipped inside the engine and never reaches
//! this type.

use thiserror::Error;

/// Engine-level error, surfaced unchanged to the CLI.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Missing or invalid configuration: absent sync section, missing bucket
    /// name, or both clean flags set.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed item entry in the configured item list.
    #[error("invalid item: {0}")]
    Validation(String),

    /// A backend call failed: unreachable bucket, put, list or delete.
    #[error("remote storage error: {0}")]
    Remote(String),

    /// Local filesystem failure while expanding an item.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
