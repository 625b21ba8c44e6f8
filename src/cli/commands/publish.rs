use anyhow::Result;

use crate::cli::commands::{build_runner, resolve_bucket};

pub struct PublishCommand {
    pub bucket: Option<String>,
    pub key: String,
    pub content: String,
}

impl PublishCommand {
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
        println!("💡 Run 'object-relay consume' to process it.");
        Ok(())
    }
}
