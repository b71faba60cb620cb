//! # contract: storage backend client interface
//!
//! This module defines a single trait ([`StorageClient`]) and the plain data
//! types the synchronisation engine exchanges with a storage backend: the
//! bucket existence probe, object puts, paginated listing and batch deletes.
//!
//! ## Interface & Extensibility
//! - Implement [`StorageClient`] to target a new backend (API client,
//!   filesystem fake, etc.); see [`crate::client`] for the AWS SDK one.
//! - All methods are async and return boxed error trait objects; the engine
//!   wraps them into its own error kinds with context.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`, so consumers generate
//!   deterministic mocks for unit/integration tests. Mocks are exported
//!   under the `test-export-mocks` feature.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Uniform boxed error for backend calls.
pub type StorageError = Box<dyn std::error::Error + Send + Sync>;

/// Parameters for a single object put.
///
/// `bucket`, `key` and `body` always carry the effective values: per-item
/// overrides have already been merged by the engine.
#[derive(Debug, Clone, Default)]
pub struct PutObjectRequest {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub content_encoding: Option<String>,
    pub content_disposition: Option<String>,
    pub acl: Option<String>,
}

/// Parameters for one page of a bucket listing.
#[derive(Debug, Clone)]
pub struct ListObjectsRequest {
    pub bucket: String,
    /// Page size limit; the engine always asks for 1000.
    pub max_keys: i32,
    /// Key prefix filter, already sanitised by the engine.
    pub prefix: Option<String>,
    /// Continuation token from the previous page, if any.
    pub continuation_token: Option<String>,
}

/// One page of listing results.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsPage {
    pub objects: Vec<RemoteObject>,
    /// Present when more pages follow.
    pub next_continuation_token: Option<String>,
}

/// An entry already present in the bucket. Produced only by listing,
/// consumed only by the cleaner to build a deletion batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObject {
    pub key: String,
}

/// Trait for the storage backend the engine synchronises against.
/// The implementor is responsible for transport, credentials and wire detail.
///
/// The trait is implemented by real clients and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Existence/permission probe for the bucket.
    async fn head_bucket(&self, bucket: &str) -> Result<(), StorageError>;

    /// Upload a single object.
    async fn put_object(&self, req: PutObjectRequest) -> Result<(), StorageError>;

    /// Fetch one page of the bucket listing.
    async fn list_objects(&self, req: ListObjectsRequest) -> Result<ListObjectsPage, StorageError>;

    /// Batch-delete the given object keys. Only bare keys are sent; listing
    /// metadata is stripped by construction.
    async fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<(), StorageError>;
}
