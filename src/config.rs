use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Object Relay
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    /// Connection settings for the emulated AWS environment
    pub aws: AwsConfig,
    /// Object storage settings
    pub storage: StorageConfig,
    /// Notification queue settings
    pub queue: QueueConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AwsConfig {
    /// Endpoint URL of the emulated cloud environment (LocalStack)
    pub endpoint_url: String,
    /// Region identifier
    pub region: String,
    /// Access key id (the emulator accepts any value)
    pub access_key_id: String,
    /// Secret access key (the emulator accepts any value)
    pub secret_access_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Bucket objects are uploaded to and downloaded from
    pub bucket: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueConfig {
    /// Full queue URL as issued by the emulator
    pub url: String,
    /// Long-poll bound for a single receive call, in seconds (SQS caps this at 20)
    pub wait_time_seconds: u64,
    /// Overall deadline for the message to become visible, in seconds
    pub readiness_timeout_seconds: u64,
    /// Delay between receive attempts while awaiting visibility, in milliseconds
    pub poll_backoff_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            aws: AwsConfig {
                endpoint_url: "http://localhost:4566".to_string(),
                region: "us-east-1".to_string(),
                access_key_id: "test".to_string(),
                secret_access_key: "test".to_string(),
            },
            storage: StorageConfig {
                bucket: "my-local-bucket".to_string(),
            },
            queue: QueueConfig {
                url: "http://sqs.us-east-1.localhost.localstack.cloud:4566/000000000000/my-local-queue"
                    .to_string(),
                wait_time_seconds: 10,
                readiness_timeout_seconds: 20,
                poll_backoff_ms: 500,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl RelayConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (object-relay.toml)
    /// 3. Environment variables (prefixed with OBJECT_RELAY__)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&RelayConfig::default())?);

        if Path::new("object-relay.toml").exists() {
            builder = builder.add_source(File::with_name("object-relay"));
        }

        // Override with environment variables, e.g. OBJECT_RELAY__STORAGE__BUCKET
        builder = builder.add_source(
            Environment::with_prefix("OBJECT_RELAY")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut relay_config: RelayConfig = config.try_deserialize()?;

        // Standard AWS variables take effect when set, so the relay picks up
        // whatever credentials the surrounding shell already exports.
        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            relay_config.aws.endpoint_url = endpoint;
        }
        if let Ok(region) = std::env::var("AWS_REGION") {
            relay_config.aws.region = region;
        }
        if let Ok(key_id) = std::env::var("AWS_ACCESS_KEY_ID") {
            relay_config.aws.access_key_id = key_id;
        }
        if let Ok(secret) = std::env::var("AWS_SECRET_ACCESS_KEY") {
            relay_config.aws.secret_access_key = secret;
        }

        Ok(relay_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<RelayConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = RelayConfig::load_env_file();
        RelayConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static RelayConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
