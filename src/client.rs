#![doc = "Storage client integration for CLI and core: bridges the trait abstraction to the AWS S3 SDK."]
//
//! # S3 Client Integration (CLI <-> Core)
//!
//! This module provides the bridge between the CLI workflow and the storage
//! abstraction in [`crate::contract`]. It wires up the [`StorageClient`]
//! trait for real use against AWS S3 and provides the [`S3StorageClient`]
//! used by the `s3-sync` binary.
//!
//! ## Client Usage
//!
//! - Construct [`S3StorageClient`] via [`S3StorageClient::new_from_env`],
//!   which resolves region and credentials from the default AWS provider
//!   chain (environment, profile, instance metadata).
//! - All transport, signing and wire-level detail is the SDK's
//!   responsibility; this module only maps between the engine's plain data
//!   types and SDK builders.

use async_trait::async_trait;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Delete, ObjectCannedAcl, ObjectIdentifier};

use crate::contract::{
    ListObjectsPage, ListObjectsRequest, PutObjectRequest, RemoteObject, StorageClient,
    StorageError,
};

pub struct S3StorageClient {
    client: aws_sdk_s3::Client,
}

impl S3StorageClient {
    /// Build a client from the default AWS provider chain.
    pub async fn new_from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        tracing::info!(
            region = ?sdk_config.region(),
            "Initialized S3 client from environment"
        );
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl StorageClient for S3StorageClient {
    async fn head_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        tracing::info!(bucket, "Probing bucket");
        self.client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(bucket, error = %DisplayErrorContext(&e), "HeadBucket failed");
                format!("{}", DisplayErrorContext(&e)).into()
            })
    }

    async fn put_object(&self, req: PutObjectRequest) -> Result<(), StorageError> {
        tracing::info!(bucket = %req.bucket, key = %req.key, size = req.body.len(), "Putting object");
        self.client
            .put_object()
            .bucket(&req.bucket)
            .key(&req.key)
            .body(ByteStream::from(req.body))
            .set_content_type(req.content_type)
            .set_cache_control(req.cache_control)
            .set_content_encoding(req.content_encoding)
            .set_content_disposition(req.content_disposition)
            .set_acl(req.acl.map(|a| ObjectCannedAcl::from(a.as_str())))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(key = %req.key, error = %DisplayErrorContext(&e), "PutObject failed");
                format!("{}", DisplayErrorContext(&e)).into()
            })
    }

    async fn list_objects(&self, req: ListObjectsRequest) -> Result<ListObjectsPage, StorageError> {
        tracing::info!(
            bucket = %req.bucket,
            prefix = req.prefix.as_deref().unwrap_or(""),
            "Listing objects"
        );
        let output = self
            .client
            .list_objects_v2()
            .bucket(&req.bucket)
            .max_keys(req.max_keys)
            .set_prefix(req.prefix)
            .set_continuation_token(req.continuation_token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(bucket = %req.bucket, error = %DisplayErrorContext(&e), "ListObjectsV2 failed");
                StorageError::from(format!("{}", DisplayErrorContext(&e)))
            })?;

        let objects = output
            .contents()
            .iter()
            .filter_map(|o| o.key().map(|k| RemoteObject { key: k.to_string() }))
            .collect();

        let next_continuation_token = if output.is_truncated() == Some(true) {
            output.next_continuation_token().map(String::from)
        } else {
            None
        };

        Ok(ListObjectsPage {
            objects,
            next_continuation_token,
        })
    }

    async fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<(), StorageError> {
        tracing::info!(bucket, count = keys.len(), "Deleting objects");
        let identifiers = keys
            .into_iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<Vec<_>, _>>()?;
        let delete = Delete::builder().set_objects(Some(identifiers)).build()?;

        self.client
            .delete_objects()
            .bucket(bucket)
            .delete(delete)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(bucket, error = %DisplayErrorContext(&e), "DeleteObjects failed");
                format!("{}", DisplayErrorContext(&e)).into()
            })
    }
}
