//! High-level engine: orchestrates upload traversal and bucket cleaning.
//!
//! This module provides the top-level synchronisation logic for a declared
//! item list and a target bucket. It implements a coordinated engine that:
//!   - Probes the bucket once up front and aborts on an unreachable bucket
//!   - Expands each configured item (file or directory) depth-first into
//!     (local path, destination key) pairs and issues one put per leaf file
//!   - Cleans the bucket selectively by item prefix, or wipes it entirely,
//!     through a fully paginated listing
//!
//! # Major Types
//! - [`Synchroniser`]: the engine, generic over a [`StorageClient`]
//! - [`Trigger`]: how an invocation was initiated (direct command or host
//!   lifecycle hook); hook invocations honour the `ignoreHooks` flag
//!
//! # Responsibilities
//! - Fail-fast orchestration: any backend failure aborts the whole run, and
//!   partially uploaded or deleted state is left as-is (no rollback)
//! - Sequential awaits throughout: no parallel fan-out, no shared mutable
//!   state across concurrent operations because there are none
//! - Invokes logging throughout for traceability
//!
//! # Error Handling
//! Backend failures surface as [`SyncError::Remote`] with the backend
//! message; malformed items as [`SyncError::Validation`]; conflicting clean
//! flags as [`SyncError::Config`]. The one soft failure is a configured item
//! whose local path does not exist: logged and skipped, run continues.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::config::{ItemSpec, SyncConfig};
use crate::contract::{ListObjectsRequest, PutObjectRequest, RemoteObject, StorageClient};
use crate::error::SyncError;
use crate::sanitise::sanitise_key;

/// Listing page size; the backend caps single responses at this many keys.
const MAX_OBJECTS_PER_PAGE: i32 = 1000;

/// How a run was initiated. Hook-triggered runs are skipped entirely when
/// the config sets `ignoreHooks`; direct commands always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    DirectCommand,
    LifecycleHook,
}

/// The synchronisation engine. Construction validates the configuration
/// afresh; nothing is cached across invocations.
#[derive(Debug)]
pub struct Synchroniser<C> {
    config: SyncConfig,
    client: C,
}

impl<C: StorageClient> Synchroniser<C> {
    pub fn new(config: SyncConfig, client: C) -> Result<Self, SyncError> {
        config.validate()?;
        Ok(Self { config, client })
    }

    /// Entry point for the upload operation.
    pub async fn run_upload(&self, trigger: Trigger) -> Result<(), SyncError> {
        if trigger == Trigger::LifecycleHook && self.config.ignore_hooks {
            info!("ignoreHooks is set in the sync config; skipping hook-triggered upload");
            return Ok(());
        }
        self.upload().await
    }

    /// Entry point for the clean operation.
    pub async fn run_clean(&self, trigger: Trigger) -> Result<(), SyncError> {
        if trigger == Trigger::LifecycleHook && self.config.ignore_hooks {
            info!("ignoreHooks is set in the sync config; skipping hook-triggered clean");
            return Ok(());
        }
        self.clean().await
    }

    async fn upload(&self) -> Result<(), SyncError> {
        info!(bucket = %self.config.bucket, "Uploading items to bucket");

        if let Err(e) = self.client.head_bucket(&self.config.bucket).await {
            error!(bucket = %self.config.bucket, error = %e, "Bucket probe failed");
            return Err(SyncError::Remote(format!(
                "Bucket {} does not exist or you don't have permissions to access it.",
                self.config.bucket
            )));
        }

        let Some(items) = &self.config.items else {
            info!("No items provided in the config. Nothing will be uploaded.");
            return Ok(());
        };

        for item in items {
            let spec = item.to_spec()?;
            self.upload_item(spec).await?;
        }

        Ok(())
    }

    /// Expand one configured item into puts.
    ///
    /// The name is sanitised into the destination key before any recursion,
    /// so child keys build on the sanitised root rather than the raw path.
    async fn upload_item(&self, spec: ItemSpec) -> Result<(), SyncError> {
        let local_path = std::env::current_dir()?.join(&spec.name);
        if !local_path.exists() {
            info!(path = %local_path.display(), "Local path does not exist, skipping item");
            return Ok(());
        }

        info!(item = %spec.name, "Uploading item");
        let destination = sanitise_key(&spec.name);

        // Depth-first expansion over (local path, destination key) pairs.
        // Sibling order is filesystem order and deliberately unspecified.
        let mut stack: Vec<(PathBuf, String)> = vec![(local_path, destination)];
        while let Some((path, key)) = stack.pop() {
            if path.is_dir() {
                for entry in fs::read_dir(&path)? {
                    let entry = entry?;
                    let child_name = entry.file_name().to_string_lossy().into_owned();
                    stack.push((entry.path(), format!("{key}/{child_name}")));
                }
            } else {
                let request = build_put_request(&self.config.bucket, &spec, &path, &key)?;
                debug!(key = %request.key, bucket = %request.bucket, "Putting object");
                if let Err(e) = self.client.put_object(request).await {
                    error!(key = %key, error = %e, "Put failed");
                    return Err(SyncError::Remote(format!(
                        "Unable to upload {key} to bucket {}. Error: {e}",
                        self.config.bucket
                    )));
                }
            }
        }

        Ok(())
    }

    async fn clean(&self) -> Result<(), SyncError> {
        if self.config.clean_bucket && self.config.wipe_entire_bucket {
            return Err(SyncError::Config(
                "You should provide only cleanBucket or wipeEntireBucket in the sync config."
                    .to_string(),
            ));
        }

        if !self.config.clean_bucket && !self.config.wipe_entire_bucket {
            info!(
                bucket = %self.config.bucket,
                "Bucket was not cleaned because cleanBucket or wipeEntireBucket is not set to true in the sync config"
            );
            return Ok(());
        }

        let mut keys_to_delete: Vec<String> = Vec::new();
        if self.config.clean_bucket {
            for item in self.config.items.as_deref().unwrap_or_default() {
                let spec = item.to_spec()?;
                let matched = self.list_bucket_objects(Some(&spec.name)).await?;
                keys_to_delete.extend(matched.into_iter().map(|o| o.key));
            }
        } else {
            let all = self.list_bucket_objects(None).await?;
            keys_to_delete.extend(all.into_iter().map(|o| o.key));
        }

        if keys_to_delete.is_empty() {
            info!("Nothing to delete.");
            return Ok(());
        }

        info!(count = keys_to_delete.len(), "Removing remote objects");
        self.client
            .delete_objects(&self.config.bucket, keys_to_delete)
            .await
            .map_err(|e| {
                error!(bucket = %self.config.bucket, error = %e, "Batch delete failed");
                SyncError::Remote(format!(
                    "Unable to delete objects in bucket {}. Error: {e}",
                    self.config.bucket
                ))
            })
    }

    /// Enumerate bucket contents, optionally filtered by (sanitised) prefix,
    /// merging every page via the backend's continuation mechanism.
    async fn list_bucket_objects(
        &self,
        prefix: Option<&str>,
    ) -> Result<Vec<RemoteObject>, SyncError> {
        let prefix = prefix.map(sanitise_key);

        let mut objects: Vec<RemoteObject> = Vec::new();
        let mut continuation_token: Option<String> = None;
        loop {
            let request = ListObjectsRequest {
                bucket: self.config.bucket.clone(),
                max_keys: MAX_OBJECTS_PER_PAGE,
                prefix: prefix.clone(),
                continuation_token: continuation_token.take(),
            };
            let page = self.client.list_objects(request).await.map_err(|e| {
                error!(bucket = %self.config.bucket, error = %e, "Listing failed");
                SyncError::Remote(format!(
                    "Unable to list objects in bucket {}. Error: {e}",
                    self.config.bucket
                ))
            })?;

            debug!(
                page_size = page.objects.len(),
                has_more = page.next_continuation_token.is_some(),
                "Fetched listing page"
            );
            objects.extend(page.objects);

            match page.next_continuation_token {
                Some(token) => continuation_token = Some(token),
                None => break,
            }
        }

        Ok(objects)
    }
}

/// Build the put request for one leaf file, applying the item's overrides.
///
/// `Bucket`, `Key` and `Body` are defaulted from the engine's own values
/// when the override map did not already supply them; the file is not read
/// at all when a literal `Body` override is present. A fresh request is
/// built per file so overrides never leak across siblings.
fn build_put_request(
    bucket: &str,
    spec: &ItemSpec,
    path: &std::path::Path,
    key: &str,
) -> Result<PutObjectRequest, SyncError> {
    let overrides = spec.s3_config.clone().unwrap_or_default();

    let body = match overrides.body {
        Some(body) => body.into_bytes(),
        None => fs::read(path)?,
    };

    Ok(PutObjectRequest {
        bucket: overrides.bucket.unwrap_or_else(|| bucket.to_string()),
        key: overrides.key.unwrap_or_else(|| key.to_string()),
        body,
        content_type: overrides.content_type,
        cache_control: overrides.cache_control,
        content_encoding: overrides.content_encoding,
        content_disposition: overrides.content_disposition,
        acl: overrides.acl,
    })
}
