use async_trait::async_trait;

use super::domain::entities::{MediaPolicyError, UploadedImage};
use crate::shared::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("{0}")]
    InvalidFile(MediaPolicyError),

    #[error("Image not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<MediaPolicyError> for MediaError {
    fn from(err: MediaPolicyError) -> Self {
        MediaError::InvalidFile(err)
    }
}

impl From<StorageError> for MediaError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => MediaError::NotFound,
            other => MediaError::Storage(other.to_string()),
        }
    }
}

#[async_trait]
pub trait MediaUseCase: Send + Sync {
    /// Checks the body against the upload policy, then stores it under a fresh name.
    async fn upload_image(
        &self,
        content_type: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, MediaError>;

    async fn delete_image(&self, path: &str) -> Result<(), MediaError>;
}
