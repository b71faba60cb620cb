//! Configuration data model and validation.
//!
//! The YAML config file carries a `sync` section with the bucket name, the
//! declarative item list and the clean flags. Validation is a pure gate: the
//! section must be present and the bucket name non-empty. The mutual
//! exclusivity of `cleanBucket` and `wipeEntireBucket` is deliberately NOT
//! checked here; it only surfaces when the clean operation actually runs.
//!
//! Items are written either as a bare string (a relative path that doubles
//! as its own destination key) or as a record with optional backend
//! parameter overrides. Normalisation returns a fresh [`ItemSpec`] rather
//! than mutating shared state, so recursive expansion cannot observe
//! order-dependent rewrites.

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::SyncError;

/// Shape of the enclosing configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub sync: Option<SyncConfig>,
}

impl RawConfig {
    /// Extract and validate the sync section.
    pub fn into_validated(self) -> Result<SyncConfig, SyncError> {
        let config = self.sync.ok_or_else(|| {
            SyncError::Config("Please provide a sync section in your configuration.".to_string())
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// The sync configuration proper.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Target bucket name. Required and non-empty.
    #[serde(default)]
    pub bucket: String,
    /// Ordered list of local files/directories to upload.
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    /// Delete only objects under the configured item prefixes.
    #[serde(default)]
    pub clean_bucket: bool,
    /// Delete every object in the bucket.
    #[serde(default)]
    pub wipe_entire_bucket: bool,
    /// Skip hook-triggered invocations entirely.
    #[serde(default)]
    pub ignore_hooks: bool,
}

impl SyncConfig {
    /// Presence/shape check. No side effects, no network.
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.bucket.is_empty() {
            return Err(SyncError::Config("Please provide bucket name.".to_string()));
        }
        Ok(())
    }

    pub fn trace_loaded(&self) {
        info!(
            bucket = %self.bucket,
            items_count = self.items.as_ref().map_or(0, Vec::len),
            clean_bucket = self.clean_bucket,
            wipe_entire_bucket = self.wipe_entire_bucket,
            "Loaded sync configuration"
        );
        debug!(?self, "Sync configuration (full debug)");
    }
}

/// A configured upload item: either a bare relative path or a structured
/// record with backend overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Name(String),
    Spec(ItemSpec),
}

impl Item {
    /// Normalise into the structured form. Empty names are rejected at
    /// runtime, not at parse time, matching the engine's validation step.
    pub fn to_spec(&self) -> Result<ItemSpec, SyncError> {
        let spec = match self {
            Item::Name(name) => ItemSpec {
                name: name.clone(),
                s3_config: None,
            },
            Item::Spec(spec) => spec.clone(),
        };

        if spec.name.is_empty() {
            return Err(SyncError::Validation(
                "Item should be a string or an object with a non-empty name.".to_string(),
            ));
        }
        Ok(spec)
    }
}

/// Structured item record.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    /// Relative local path; after sanitisation, the destination key root.
    #[serde(default)]
    pub name: String,
    /// Backend-specific parameter overrides applied to every put issued for
    /// this item.
    #[serde(rename = "s3Config", default)]
    pub s3_config: Option<S3Overrides>,
}

/// Per-item overrides for the put request, named as the backend names them.
/// `Bucket`, `Key` and `Body` are defaulted from the engine's own values
/// when absent, never the other way round.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Overrides {
    pub bucket: Option<String>,
    pub key: Option<String>,
    /// Literal body content replacing the file bytes.
    pub body: Option<String>,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub content_encoding: Option<String>,
    pub content_disposition: Option<String>,
    #[serde(rename = "ACL")]
    pub acl: Option<String>,
}
