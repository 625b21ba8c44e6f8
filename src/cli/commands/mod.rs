pub mod consume;
pub mod publish;
pub mod run;

pub use consume::ConsumeCommand;
pub use publish::PublishCommand;
pub use run::RunCommand;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use crate::aws::load_sdk_config;
use crate::config::{config, QueueConfig};
use crate::queue::SqsQueue;
use crate::runner::{RelayRunner, RunnerOptions};
use crate::store::S3ObjectStore;

fn runner_options(queue: &QueueConfig) -> RunnerOptions {
    RunnerOptions {
        poll_wait: Duration::from_secs(queue.wait_time_seconds),
        readiness_timeout: Duration::from_secs(queue.readiness_timeout_seconds),
        poll_backoff: Duration::from_millis(queue.poll_backoff_ms),
    }
}

/// Build a runner wired to the configured emulated environment.
pub(crate) async fn build_runner() -> Result<RelayRunner> {
    let cfg = config()?;
    let shared = load_sdk_config(&cfg.aws).await;

    let store = Arc::new(S3ObjectStore::new(&shared));
    let queue = Arc::new(SqsQueue::new(&shared, cfg.queue.url.clone()));

    Ok(RelayRunner::new(store, queue, runner_options(&cfg.queue)))
}

/// Resolve the target bucket: CLI override first, configured bucket otherwise.
pub(crate) fn resolve_bucket(override_bucket: Option<&str>) -> Result<String> {
    match override_bucket {
        Some(bucket) => Ok(bucket.to_string()),
        None => Ok(config()?.storage.bucket.clone()),
    }
}
