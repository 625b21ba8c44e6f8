use anyhow::Result;

use crate::cli::commands::build_runner;
use crate::runner::RunOutcome;

pub struct ConsumeCommand;

impl ConsumeCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<()> {
        let runner = build_runner().await?;
        println!("✅ AWS clients created successfully.");
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
        Ok(())
    }
}

impl Default for ConsumeCommand {
    fn default() -> Self {
        Self::new()
    }
}
