// Object Relay - S3/SQS choreography against a local cloud emulator
// This exposes the core components for testing and integration

pub mod aws;
pub mod cli;
pub mod config;
pub mod queue;
pub mod reference;
pub mod runner;
pub mod store;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{config, init_config, RelayConfig};
pub use queue::{NotificationQueue, QueueError, QueueMessage, ReceiptToken, SqsQueue};
pub use reference::{ObjectReference, ReferenceError};
pub use runner::{RelayError, RelayRunner, RunOutcome, RunnerOptions};
pub use store::{ObjectStore, S3ObjectStore, StoreError};
pub use telemetry::init_telemetry;
