use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

pub const RESUME_CONTENT_TYPE: &str = "application/pdf";
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const PDF_MAGIC: &[u8] = b"%PDF";
const DEFAULT_FILENAME: &str = "resume.pdf";

/// The downloadable CV linked from the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Resume {
    pub id: Uuid,
    pub file_url: String,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResume {
    pub file_url: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeFileError {
    #[error("Please select a PDF file")]
    NotPdf,

    #[error("File is empty")]
    Empty,

    #[error("File size must be less than 5MB")]
    TooLarge,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ResumeUploadQuery {
    /// Original file name shown to visitors
    pub filename: Option<String>,
}

/// A PDF that passed the upload checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn parse(
        content_type: &str,
        filename: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ResumeFileError> {
        let mime = content_type.split(';').next().unwrap_or("").trim();
        if !mime.eq_ignore_ascii_case(RESUME_CONTENT_TYPE) {
            return Err(ResumeFileError::NotPdf);
        }
        if bytes.is_empty() {
            return Err(ResumeFileError::Empty);
        }
        if bytes.len() > MAX_RESUME_BYTES {
            return Err(ResumeFileError::TooLarge);
        }
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ResumeFileError::NotPdf);
        }

        let filename = filename
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        Ok(Self { filename, bytes })
    }
}

/// Object name inside the resume bucket.
pub fn resume_object_name(now: DateTime<Utc>) -> String {
    format!("resume-{}.pdf", now.timestamp_millis())
}
