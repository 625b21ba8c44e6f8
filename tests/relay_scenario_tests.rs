// End-to-end choreography scenario against in-memory capability fakes.
// Mirrors the demo scenario: upload, announce, poll, download, acknowledge.

use async_trait::async_trait;
use object_relay::queue::{NotificationQueue, QueueError, QueueMessage, ReceiptToken};
use object_relay::runner::{RelayRunner, RunOutcome, RunnerOptions};
use object_relay::store::{ObjectStore, StoreError};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
struct InMemoryStore {
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn put(&self, bucket: &str, key: &str, content: &[u8]) -> Result<(), StoreError> {
        self.objects
            .lock()
            .await
            .insert((bucket.to_string(), key.to_string()), content.to_vec());
        Ok(())
    }

    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        self.objects
            .lock()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

#[derive(Default)]
struct InMemoryQueue {
    // (body, receipt) pairs; received messages stay until deleted, as with
    // a visibility timeout that never expires during the test.
    visible: Mutex<VecDeque<(String, String)>>,
    in_flight: Mutex<HashMap<String, String>>,
    next_receipt: Mutex<u64>,
}

impl InMemoryQueue {
    async fn len(&self) -> usize {
        self.visible.lock().await.len() + self.in_flight.lock().await.len()
    }
}

#[async_trait]
impl NotificationQueue for InMemoryQueue {
    async fn send(&self, body: &str) -> Result<String, QueueError> {
        let mut counter = self.next_receipt.lock().await;
        *counter += 1;
        let receipt = format!("receipt-{counter}");
        self.visible
            .lock()
            .await
            .push_back((body.to_string(), receipt));
        Ok(format!("message-{counter}"))
    }

    async fn receive_one(&self, _wait: Duration) -> Result<Option<QueueMessage>, QueueError> {
        let Some((body, receipt)) = self.visible.lock().await.pop_front() else {
            return Ok(None);
        };
        self.in_flight
            .lock()
            .await
            .insert(receipt.clone(), body.clone());
        Ok(Some(QueueMessage {
            body,
            receipt: ReceiptToken::new(receipt),
        }))
    }

    async fn delete(&self, receipt: &ReceiptToken) -> Result<(), QueueError> {
        self.in_flight
            .lock()
            .await
            .remove(receipt.as_str())
            .map(|_| ())
            .ok_or(QueueError::InvalidReceipt)
    }
}

fn test_options() -> RunnerOptions {
    RunnerOptions {
        poll_wait: Duration::ZERO,
        readiness_timeout: Duration::ZERO,
        poll_backoff: Duration::ZERO,
    }
}

#[tokio::test]
async fn full_choreography_displays_content_and_drains_the_queue() {
    let store = Arc::new(InMemoryStore::default());
    let queue = Arc::new(InMemoryQueue::default());
    let runner = RelayRunner::new(store.clone(), queue.clone(), test_options());

    let outcome = runner
        .run(
            "my-local-bucket",
            "my-test-file.txt",
            b"Hello from LocalStack S3!",
        )
        .await
        .unwrap();

    match outcome {
        RunOutcome::Processed { reference, content } => {
            assert_eq!(reference.bucket, "my-local-bucket");
            assert_eq!(reference.key, "my-test-file.txt");
            assert_eq!(content, b"Hello from LocalStack S3!");
        }
        other => panic!("expected Processed, got {other:?}"),
    }

    // Message acknowledged: nothing visible, nothing in flight.
    assert_eq!(queue.len().await, 0);
}

#[tokio::test]
async fn uploaded_content_round_trips_byte_identical() {
    let store = InMemoryStore::default();
    for content in [
        b"".to_vec(),
        b"line one\nline two\n".to_vec(),
        vec![0u8, 159, 146, 150],
    ] {
        store.put("bucket", "key", &content).await.unwrap();
        assert_eq!(store.get("bucket", "key").await.unwrap(), content);
    }
}

#[tokio::test]
async fn consuming_an_empty_queue_is_a_successful_run() {
    let store = Arc::new(InMemoryStore::default());
    let queue = Arc::new(InMemoryQueue::default());
    let runner = RelayRunner::new(store, queue, test_options());

    let outcome = runner.consume_next().await.unwrap();
    assert!(matches!(outcome, RunOutcome::NoMessages));
}

#[tokio::test]
async fn failed_processing_leaves_the_message_for_redelivery() {
    let store = Arc::new(InMemoryStore::default());
    let queue = Arc::new(InMemoryQueue::default());
    let runner = RelayRunner::new(store, queue.clone(), test_options());

    // Announce an object that was never uploaded.
    queue
        .send(&object_relay::ObjectReference::new("my-local-bucket", "missing.txt").encode())
        .await
        .unwrap();

    let err = runner.consume_next().await.unwrap_err();
    assert!(matches!(
        err,
        object_relay::RelayError::Store(StoreError::NotFound { .. })
    ));

    // The message is still owned by the queue, to reappear after its
    // visibility timeout.
    assert_eq!(queue.len().await, 1);
}
