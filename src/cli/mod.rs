use clap::{Parser, Subcommand};

pub mod commands;

pub const DEFAULT_KEY: &str = "my-test-file.txt";
pub const DEFAULT_CONTENT: &str = "Hello from LocalStack S3!";

#[derive(Parser)]
#[command(name = "object-relay")]
#[command(about = "Relay an object through emulated S3 and SQS")]
#[command(long_about = "Object Relay uploads an object to an emulated S3 bucket, announces it \
                       on an SQS queue, polls the queue, downloads the referenced object, \
                       prints its content, and deletes the processed message. Run without a \
                       subcommand to execute the full choreography against LocalStack.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full choreography: upload, announce, poll, download, acknowledge
    Run {
        /// Bucket to upload to (defaults to the configured bucket)
        #[arg(long, help = "Override the configured bucket")]
        bucket: Option<String>,
        /// Object key to upload under
        #[arg(long, default_value = DEFAULT_KEY, help = "Object key to upload under")]
        key: String,
        /// Content to upload
        #[arg(long, default_value = DEFAULT_CONTENT, help = "Content to upload")]
        content: String,
    },
    /// Upload an object and announce it on the queue (producer half only)
    Publish {
        /// Bucket to upload to (defaults to the configured bucket)
        #[arg(long, help = "Override the configured bucket")]
        bucket: Option<String>,
        /// Object key to upload under
        #[arg(long, default_value = DEFAULT_KEY, help = "Object key to upload under")]
        key: String,
        /// Content to upload
        #[arg(long, default_value = DEFAULT_CONTENT, help = "Content to upload")]
        content: String,
    },
    /// Poll the queue once and process the referenced object (consumer half only)
    Consume,
}
