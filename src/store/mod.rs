//! Object storage capability.
//!
//! Provides a trait-based abstraction over key-addressed blob storage,
//! enabling testable choreography through dependency injection.

pub mod s3;

pub use s3::S3ObjectStore;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },
    #[error("access denied to {bucket}/{key}")]
    AccessDenied { bucket: String, key: String },
    #[error("transport failure talking to object store: {message}")]
    Transport { message: String },
    #[error("object store error: {message}")]
    Other { message: String },
}

/// Trait for object storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store content under (bucket, key). The object is retrievable once
    /// this returns.
    async fn put(&self, bucket: &str, key: &str, content: &[u8]) -> Result<(), StoreError>;

    /// Fetch the full content of (bucket, key).
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;
}
