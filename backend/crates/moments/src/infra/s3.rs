//! S3-compatible document store
//!
//! Talks to Cloudflare R2 in production. Any S3 endpoint works as long as
//! it accepts path-style requests.

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;

use crate::application::config::R2Config;
use crate::domain::store::{DocumentStore, StoreError};

/// R2 requires the literal region `auto`
const R2_REGION: &str = "auto";

/// Object store client bound to one bucket
#[derive(Clone, Debug)]
pub struct S3DocumentStore {
    client: S3Client,
    bucket: String,
}

impl S3DocumentStore {
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from static R2 credentials
    pub async fn connect(config: &R2Config) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.expose().to_string(),
            None,
            None,
            "r2-static",
        );

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(R2_REGION))
            .endpoint_url(config.endpoint())
            .credentials_provider(credentials)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(true)
            .build();

        tracing::info!(
            bucket = %config.bucket,
            endpoint = %config.endpoint(),
            "Initialized S3 document store"
        );

        Self::new(S3Client::from_conf(s3_config), config.bucket.clone())
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// `NoSuchKey` is the only failure that means "absent"
fn classify_get_error(key: &str, err: SdkError<GetObjectError>) -> StoreError {
    let missing = err
        .as_service_error()
        .map(|e| e.is_no_such_key())
        .unwrap_or(false);

    if missing {
        StoreError::NotFound(key.to_string())
    } else {
        StoreError::Backend(DisplayErrorContext(&err).to_string())
    }
}

impl DocumentStore for S3DocumentStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify_get_error(key, e))?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to read object body: {}", e)))?;

        let bytes = data.into_bytes().to_vec();
        tracing::debug!(bucket = %self.bucket, key, size = bytes.len(), "Fetched object");
        Ok(bytes)
    }

    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StoreError> {
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StoreError::Backend(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(bucket = %self.bucket, key, size, "Stored object");
        Ok(())
    }
}
