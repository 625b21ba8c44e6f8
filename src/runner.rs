//! Choreography runner: the fixed upload → notify → poll → download →
//! display → acknowledge sequence against the two capability interfaces.
//!
//! Acknowledgement ordering is the one invariant the runner enforces: a
//! message is deleted only after its referenced object content has been
//! fully read. Any failure between receive and delete leaves the message on
//! the queue, so it reappears after its visibility timeout; processing is
//! explicitly at-least-once.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::queue::{NotificationQueue, QueueError, QueueMessage};
use crate::reference::{ObjectReference, ReferenceError};
use crate::store::{ObjectStore, StoreError};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// Terminal state of one consumer pass.
#[derive(Debug)]
pub enum RunOutcome {
    /// No message became visible within the readiness deadline. A valid
    /// terminal state, not an error.
    NoMessages,
    /// One message was processed and acknowledged.
    Processed {
        reference: ObjectReference,
        content: Vec<u8>,
    },
}

#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Long-poll bound for a single receive call.
    pub poll_wait: Duration,
    /// Overall deadline for a sent message to become visible.
    pub readiness_timeout: Duration,
    /// Delay between receive attempts.
    pub poll_backoff: Duration,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            poll_wait: Duration::from_secs(10),
            readiness_timeout: Duration::from_secs(20),
            poll_backoff: Duration::from_millis(500),
        }
    }
}

pub struct RelayRunner {
    store: Arc<dyn ObjectStore>,
    queue: Arc<dyn NotificationQueue>,
    options: RunnerOptions,
}

impl RelayRunner {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        queue: Arc<dyn NotificationQueue>,
        options: RunnerOptions,
    ) -> Self {
        Self {
            store,
            queue,
            options,
        }
    }

    /// Producer half: upload the object, then announce it on the queue.
    pub async fn produce(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
    ) -> Result<ObjectReference, RelayError> {
        self.store.put(bucket, key, content).await?;
        info!(bucket, key, bytes = content.len(), "object uploaded");

        let reference = ObjectReference::new(bucket, key);
        let message_id = self.queue.send(&reference.encode()).await?;
        info!(%message_id, "notification sent");

        Ok(reference)
    }

    /// Consumer half: poll for one message, resolve its reference, fetch the
    /// object, and acknowledge the message.
    pub async fn consume_next(&self) -> Result<RunOutcome, RelayError> {
        let Some(message) = self.await_message().await? else {
            info!("no messages became visible within the deadline");
            return Ok(RunOutcome::NoMessages);
        };

        let reference = ObjectReference::decode(&message.body).map_err(|err| {
            warn!(body = %message.body, "received message with undecodable payload");
            err
        })?;
        info!(bucket = %reference.bucket, key = %reference.key, "reference resolved");

        let content = self.store.get(&reference.bucket, &reference.key).await?;

        // Content is fully in hand; only now may the message leave the queue.
        self.queue.delete(&message.receipt).await?;
        info!("message acknowledged and deleted");

        Ok(RunOutcome::Processed { reference, content })
    }

    /// Full choreography: produce, then consume what was just announced.
    pub async fn run(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
    ) -> Result<RunOutcome, RelayError> {
        self.produce(bucket, key, content).await?;
        self.consume_next().await
    }

    /// Poll with backoff until a message arrives or the readiness deadline
    /// passes. Each attempt is itself a bounded long poll, so the deadline
    /// covers send-to-visible latency rather than a fixed sleep guess.
    async fn await_message(&self) -> Result<Option<QueueMessage>, RelayError> {
        let deadline = Instant::now() + self.options.readiness_timeout;
        loop {
            if let Some(message) = self.queue.receive_one(self.options.poll_wait).await? {
                return Ok(Some(message));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            tokio::time::sleep(self.options.poll_backoff).await;
        }
    }
}
