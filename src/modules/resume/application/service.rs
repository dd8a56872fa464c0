use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use super::domain::entities::{
    resume_object_name, NewResume, Resume, ResumeFile, RESUME_CONTENT_TYPE,
};
use super::ports::{ResumeError, ResumeRepository, ResumeUseCase};
use crate::shared::storage::{object_name_from_url, ObjectStorage};

pub struct ResumeService<R> {
    repository: R,
    storage: Arc<dyn ObjectStorage>,
    bucket: String,
}

impl<R> ResumeService<R> {
    pub fn new(repository: R, storage: Arc<dyn ObjectStorage>, bucket: impl Into<String>) -> Self {
        Self {
            repository,
            storage,
            bucket: bucket.into(),
        }
    }

    async fn discard_object(&self, file_url: &str) {
        let Some(name) = object_name_from_url(file_url) else {
            warn!(file_url, "Resume URL has no object name; skipping storage cleanup");
            return;
        };
        if let Err(e) = self.storage.remove(&self.bucket, &[name]).await {
            warn!(error = %e, file_url, "Failed to remove resume object");
        }
    }
}

#[async_trait]
impl<R: ResumeRepository> ResumeUseCase for ResumeService<R> {
    async fn current(&self) -> Result<Option<Resume>, ResumeError> {
        Ok(self.repository.latest().await?)
    }

    async fn replace(&self, file: ResumeFile) -> Result<Resume, ResumeError> {
        let object_name = resume_object_name(Utc::now());
        let stored = self
            .storage
            .upload(&self.bucket, &object_name, RESUME_CONTENT_TYPE, file.bytes)
            .await?;

        // Until the swap commits, the previous row and object stay untouched.
        let previous = match self.repository.latest().await {
            Ok(previous) => previous,
            Err(e) => {
                self.discard_object(&stored.public_url).await;
                return Err(e.into());
            }
        };

        let swapped = self
            .repository
            .swap(
                previous.as_ref().map(|p| p.id),
                NewResume {
                    file_url: stored.public_url.clone(),
                    filename: file.filename,
                },
            )
            .await;

        match swapped {
            Ok(resume) => {
                if let Some(previous) = previous {
                    self.discard_object(&previous.file_url).await;
                }
                info!(resume_id = %resume.id, object = %stored.path, "Resume replaced");
                Ok(resume)
            }
            Err(e) => {
                self.discard_object(&stored.public_url).await;
                Err(e.into())
            }
        }
    }

    async fn remove(&self) -> Result<(), ResumeError> {
        let current = self.repository.latest().await?.ok_or(ResumeError::NotFound)?;
        self.repository.delete(current.id).await?;
        self.discard_object(&current.file_url).await;
        info!(resume_id = %current.id, "Resume removed");
        Ok(())
    }
}
