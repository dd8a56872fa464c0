use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::domain::entities::{checked_object_path, UploadedImage};
use super::domain::upload_policy::UploadPolicy;
use super::ports::{MediaError, MediaUseCase};
use crate::shared::storage::ObjectStorage;

pub struct MediaService {
    storage: Arc<dyn ObjectStorage>,
    bucket: String,
    policy: UploadPolicy,
}

impl MediaService {
    pub fn new(storage: Arc<dyn ObjectStorage>, bucket: impl Into<String>) -> Self {
        Self {
            storage,
            bucket: bucket.into(),
            policy: UploadPolicy::default(),
        }
    }
}

#[async_trait]
impl MediaUseCase for MediaService {
    async fn upload_image(
        &self,
        content_type: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, MediaError> {
        let upload = self.policy.check(content_type, filename, bytes)?;
        let object_name = upload.object_name(Uuid::new_v4());

        let stored = self
            .storage
            .upload(&self.bucket, &object_name, &upload.content_type, upload.bytes)
            .await?;

        info!(bucket = %stored.bucket, path = %stored.path, "Image uploaded");
        Ok(UploadedImage {
            path: stored.path,
            public_url: stored.public_url,
        })
    }

    async fn delete_image(&self, path: &str) -> Result<(), MediaError> {
        let path = checked_object_path(path)?;
        self.storage.remove(&self.bucket, &[path.clone()]).await?;
        info!(bucket = %self.bucket, path = %path, "Image removed");
        Ok(())
    }
}
