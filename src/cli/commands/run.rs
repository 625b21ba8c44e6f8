use anyhow::Result;

use crate::cli::commands::{build_runner, resolve_bucket};
use crate::cli::{DEFAULT_CONTENT, DEFAULT_KEY};
use crate::runner::RunOutcome;

pub struct RunCommand {
    pub bucket: Option<String>,
    pub key: String,
    pub content: String,
}

impl Default for RunCommand {
    fn default() -> Self {
        Self {
            bucket: None,
            key: DEFAULT_KEY.to_string(),
            content: DEFAULT_CONTENT.to_string(),
        }
    }
}

impl RunCommand {
    pub fn new(bucket: Option<String>, key: String, content: String) -> Self {
        Self {
            bucket,
            key,
            content,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let bucket = resolve_bucket(self.bucket.as_deref())?;
        let runner = build_runner().await?;
        println!("✅ AWS clients created successfully.");

        runner
            .produce(&bucket, &self.key, self.content.as_bytes())
            .await?;
        println!("⬆️  Object uploaded to bucket '{bucket}' with key '{}'.", self.key);
        println!("✉️  Notification sent to the queue.");
        println!("------------------------------------");

        println!("⬇️  Polling for messages...");
        match runner.consume_next().await? {
            RunOutcome::NoMessages => {
                println!("📭 No messages found in the queue.");
            }
            RunOutcome::Processed { reference, content } => {
                println!(
                    "📬 Message received for '{}/{}'.",
                    reference.bucket, reference.key
                );
                println!(
                    "📄 Object content: '{}'",
                    String::from_utf8_lossy(&content)
                );
                println!("🗑️  Message deleted from the queue.");
            }
        }

        println!("🚀 Relay finished.");
        Ok(())
    }
}
