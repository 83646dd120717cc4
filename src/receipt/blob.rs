//! Blob storage for receipt images.
//!
//! The [`BlobStore`] trait is the seam between the upload handler and the
//! storage service, with an S3-compatible client for production and an
//! in-memory store for tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{config::Credentials, primitives::ByteStream};

use crate::{BlobConfig, Error};

/// A place that receipt blobs can be uploaded to.
#[async_trait]
pub trait BlobStore: Clone + Send + Sync + 'static {
    /// Uploads `data` under `blob_name`, overwriting any existing blob of
    /// the same name, and returns the public URL of the blob.
    ///
    /// # Errors
    /// Returns [`Error::UploadFailed`] if the upload does not complete.
    async fn put_blob(&self, blob_name: &str, data: Vec<u8>) -> Result<String, Error>;
}

/// A blob store backed by the configured storage account.
#[derive(Debug, Clone)]
pub struct BlobClient {
    client: aws_sdk_s3::Client,
    config: BlobConfig,
}

impl BlobClient {
    /// Creates a client for the storage account in `config`.
    pub async fn new(config: BlobConfig) -> Self {
        let credentials = Credentials::new(
            &config.account,
            &config.access_key,
            None,
            None,
            "blob-settings",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .credentials_provider(credentials)
            .endpoint_url(config.endpoint_url())
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            config,
        }
    }
}

#[async_trait]
impl BlobStore for BlobClient {
    async fn put_blob(&self, blob_name: &str, data: Vec<u8>) -> Result<String, Error> {
        self.client
            .put_object()
            .bucket(&self.config.container)
            .key(blob_name)
            .body(ByteStream::from(data))
            .content_type(content_type_for(blob_name))
            .send()
            .await
            .map_err(|error| Error::UploadFailed(error.to_string()))?;

        Ok(self.config.public_url(blob_name))
    }
}

/// A blob store that keeps blobs in memory, for use in tests.
#[derive(Debug, Clone)]
pub struct MemoryBlobStore {
    config: BlobConfig,
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    /// Creates an empty in-memory store that formats URLs with `config`.
    pub fn new(config: BlobConfig) -> Self {
        Self {
            config,
            blobs: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the stored bytes for `blob_name`, if any.
    pub fn get_blob(&self, blob_name: &str) -> Option<Vec<u8>> {
        self.blobs
            .lock()
            .ok()
            .and_then(|blobs| blobs.get(blob_name).cloned())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put_blob(&self, blob_name: &str, data: Vec<u8>) -> Result<String, Error> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|error| Error::UploadFailed(error.to_string()))?;

        blobs.insert(blob_name.to_owned(), data);

        Ok(self.config.public_url(blob_name))
    }
}

fn content_type_for(blob_name: &str) -> &'static str {
    let extension = blob_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use crate::BlobConfig;

    use super::{BlobStore, MemoryBlobStore, content_type_for};

    fn get_test_config() -> BlobConfig {
        BlobConfig {
            account: "expensinator".to_owned(),
            access_key: "c2VjcmV0".to_owned(),
            container: "receipts".to_owned(),
        }
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for("receipt-1.png"), "image/png");
        assert_eq!(content_type_for("receipt-1.JPG"), "image/jpeg");
        assert_eq!(content_type_for("scan.pdf"), "application/pdf");
        assert_eq!(content_type_for("no-extension"), "application/octet-stream");
    }

    #[tokio::test]
    async fn memory_store_keeps_blob_and_formats_url() {
        let store = MemoryBlobStore::new(get_test_config());

        let url = store
            .put_blob("receipt-1.png", b"not really a png".to_vec())
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://expensinator.blob.core.windows.net/receipts/receipt-1.png"
        );
        assert_eq!(
            store.get_blob("receipt-1.png"),
            Some(b"not really a png".to_vec())
        );
    }

    #[tokio::test]
    async fn put_blob_overwrites_existing_blob() {
        let store = MemoryBlobStore::new(get_test_config());

        store
            .put_blob("receipt-1.png", b"first".to_vec())
            .await
            .unwrap();
        store
            .put_blob("receipt-1.png", b"second".to_vec())
            .await
            .unwrap();

        assert_eq!(store.get_blob("receipt-1.png"), Some(b"second".to_vec()));
    }
}
