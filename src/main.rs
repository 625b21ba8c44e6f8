use anyhow::Result;
use clap::Parser;

use object_relay::cli::commands::{ConsumeCommand, PublishCommand, RunCommand};
use object_relay::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tokio::runtime::Runtime::new()?.block_on(async {
        object_relay::config::init_config()?;
        let cfg = object_relay::config::config()?;
        object_relay::telemetry::init_telemetry(&cfg.observability.log_level)?;

        match cli.command {
            // Default behavior: run the full choreography
            None => RunCommand::default().execute().await,
            Some(Commands::Run {
                bucket,
                key,
                content,
            }) => RunCommand::new(bucket, key, content).execute().await,
            Some(Commands::Publish {
                bucket,
                key,
                content,
            }) => PublishCommand::new(bucket, key, content).execute().await,
            Some(Commands::Consume) => ConsumeCommand::new().execute().await,
        }
    })
}
