//! S3-backed object store, pointed at the emulated endpoint.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::Client;
use tracing::debug;

use super::{ObjectStore, StoreError};

pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Build an S3 client from the shared config. Path-style addressing is
    /// required because LocalStack does not resolve virtual-hosted bucket
    /// names.
    pub fn new(shared: &SdkConfig) -> Self {
        let conf = aws_sdk_s3::config::Builder::from(shared)
            .force_path_style(true)
            .build();
        Self {
            client: Client::from_conf(conf),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, bucket: &str, key: &str, content: &[u8]) -> Result<(), StoreError> {
        debug!(bucket, key, bytes = content.len(), "putting object");
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(content.to_owned().into())
            .send()
            .await
            .map_err(|err| classify(err, bucket, key))?;
        Ok(())
    }

    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        debug!(bucket, key, "getting object");
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| classify(err, bucket, key))?;

        let data = resp.body.collect().await.map_err(|err| StoreError::Transport {
            message: format!("reading object body: {err}"),
        })?;
        Ok(data.into_bytes().to_vec())
    }
}

/// Fold SDK errors into the store taxonomy. Service error codes distinguish
/// missing objects and permission failures; connection-level failures map to
/// `Transport`.
fn classify<E>(err: SdkError<E>, bucket: &str, key: &str) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            StoreError::Transport {
                message: format!("{}", DisplayErrorContext(&err)),
            }
        }
        SdkError::ServiceError(ctx) => match ctx.err().code() {
            Some("NoSuchKey") | Some("NoSuchBucket") => StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            Some("AccessDenied") => StoreError::AccessDenied {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            _ => StoreError::Other {
                message: format!("{}", DisplayErrorContext(&err)),
            },
        },
        _ => StoreError::Other {
            message: format!("{}", DisplayErrorContext(&err)),
        },
    }
}
