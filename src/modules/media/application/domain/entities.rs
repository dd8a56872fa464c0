use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaPolicyError {
    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("File name must be at most {0} characters")]
    NameTooLong(usize),

    #[error("File is empty")]
    Empty,

    #[error("File size must be less than 5MB")]
    TooLarge,

    #[error("Invalid object path")]
    InvalidPath,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ImageUploadQuery {
    /// Original file name, checked against the length limit
    pub filename: Option<String>,
}

/// An image body that passed the upload policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub content_type: String,
    pub extension: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// `<uuid>.<ext>`; the original name never reaches the bucket.
    pub fn object_name(&self, id: Uuid) -> String {
        format!("{}.{}", id, self.extension)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UploadedImage {
    pub path: String,
    pub public_url: String,
}

/// Object path accepted by the delete endpoint: a single segment.
pub fn checked_object_path(path: &str) -> Result<String, MediaPolicyError> {
    let path = path.trim();
    if path.is_empty() || path.contains('/') || path.contains('\\') || path.contains("..") {
        return Err(MediaPolicyError::InvalidPath);
    }
    Ok(path.to_string())
}
