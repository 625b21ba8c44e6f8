//! SQS-backed notification queue, pointed at the emulated endpoint.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sqs::Client;
use std::time::Duration;
use tracing::debug;

use super::{NotificationQueue, QueueError, QueueMessage, ReceiptToken};

/// SQS caps `WaitTimeSeconds` at 20.
const MAX_WAIT_SECONDS: u64 = 20;

pub struct SqsQueue {
    client: Client,
    queue_url: String,
}

impl SqsQueue {
    pub fn new(shared: &SdkConfig, queue_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(shared),
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl NotificationQueue for SqsQueue {
    async fn send(&self, body: &str) -> Result<String, QueueError> {
        debug!(queue_url = %self.queue_url, "sending message");
        let resp = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(classify)?;
        Ok(resp.message_id().unwrap_or_default().to_string())
    }

    async fn receive_one(&self, wait: Duration) -> Result<Option<QueueMessage>, QueueError> {
        let wait_seconds = wait.as_secs().min(MAX_WAIT_SECONDS) as i32;
        debug!(queue_url = %self.queue_url, wait_seconds, "polling for one message");
        let resp = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(1)
            .wait_time_seconds(wait_seconds)
            .send()
            .await
            .map_err(classify)?;

        let Some(message) = resp.messages.unwrap_or_default().into_iter().next() else {
            return Ok(None);
        };

        let receipt = message
            .receipt_handle
            .map(ReceiptToken::new)
            .ok_or_else(|| QueueError::Other {
                message: "received message carries no receipt handle".to_string(),
            })?;

        Ok(Some(QueueMessage {
            body: message.body.unwrap_or_default(),
            receipt,
        }))
    }

    async fn delete(&self, receipt: &ReceiptToken) -> Result<(), QueueError> {
        debug!(queue_url = %self.queue_url, "deleting message");
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt.as_str())
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }
}

/// Fold SDK errors into the queue taxonomy by service error code.
fn classify<E>(err: SdkError<E>) -> QueueError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            QueueError::Transport {
                message: format!("{}", DisplayErrorContext(&err)),
            }
        }
        SdkError::ServiceError(ctx) => match ctx.err().code() {
            Some("RequestThrottled") | Some("ThrottlingException") | Some("OverLimit") => {
                QueueError::Throttled
            }
            Some("ReceiptHandleIsInvalid") | Some("InvalidIdFormat") => QueueError::InvalidReceipt,
            _ => QueueError::Other {
                message: format!("{}", DisplayErrorContext(&err)),
            },
        },
        _ => QueueError::Other {
            message: format!("{}", DisplayErrorContext(&err)),
        },
    }
}
