//! Shared AWS SDK bootstrap for the emulated environment.
//!
//! Both service clients are derived from one `SdkConfig` carrying the
//! endpoint override, static credentials, and region from [`AwsConfig`].

use aws_config::{ConfigLoader, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;

use crate::config::AwsConfig;

pub async fn load_sdk_config(aws: &AwsConfig) -> SdkConfig {
    // The emulator does not validate credentials, but the SDK requires a
    // provider to sign requests.
    let credentials = Credentials::new(
        aws.access_key_id.clone(),
        aws.secret_access_key.clone(),
        None,
        None,
        "object-relay-config",
    );

    ConfigLoader::default()
        .credentials_provider(credentials)
        .region(Region::new(aws.region.clone()))
        .endpoint_url(&aws.endpoint_url)
        .load()
        .await
}
