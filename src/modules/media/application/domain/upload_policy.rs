use super::entities::{ImageUpload, MediaPolicyError};

/// Limits applied to section images before they reach storage.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];

    pub fn check(
        &self,
        content_type: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ImageUpload, MediaPolicyError> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        let extension = match extension_for(&mime) {
            Some(ext) if self.allowed_mime_types.contains(&mime.as_str()) => ext,
            _ => return Err(MediaPolicyError::UnsupportedType(mime)),
        };

        let filename = filename.trim();
        if filename.chars().count() > self.max_file_name_len {
            return Err(MediaPolicyError::NameTooLong(self.max_file_name_len));
        }
        if bytes.is_empty() {
            return Err(MediaPolicyError::Empty);
        }
        if bytes.len() > self.max_file_size_bytes {
            return Err(MediaPolicyError::TooLarge);
        }

        Ok(ImageUpload {
            content_type: mime,
            extension,
            bytes,
        })
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}

fn extension_for(mime: &str) -> Option<&'static str> {
    match mime {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}
