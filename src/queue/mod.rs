//! Notification queue capability.
//!
//! Receive-then-acknowledge semantics: a received message stays invisible to
//! other consumers until it is deleted by receipt token or its visibility
//! timeout expires.

pub mod sqs;

pub use sqs::SqsQueue;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Opaque handle proving receipt of one message delivery, required to
/// delete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptToken(String);

impl ReceiptToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One received message delivery.
#[derive(Debug, Clone)]
pub struct QueueMessage {
    pub body: String,
    pub receipt: ReceiptToken,
}

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("queue is throttling requests")]
    Throttled,
    #[error("receipt token no longer valid")]
    InvalidReceipt,
    #[error("transport failure talking to queue: {message}")]
    Transport { message: String },
    #[error("queue error: {message}")]
    Other { message: String },
}

/// Trait for queue operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    /// Publish a message body; returns the queue-assigned message id.
    async fn send(&self, body: &str) -> Result<String, QueueError>;

    /// Long-poll for at most one message, waiting up to `wait` before
    /// returning empty.
    async fn receive_one(&self, wait: Duration) -> Result<Option<QueueMessage>, QueueError>;

    /// Delete a previously received message by its receipt token.
    async fn delete(&self, receipt: &ReceiptToken) -> Result<(), QueueError>;
}
