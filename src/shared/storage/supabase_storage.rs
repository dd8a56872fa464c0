use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use super::{ObjectStorage, StorageError, StoredObject};

/// Storage API client authenticated with the service-role key.
#[derive(Clone)]
pub struct SupabaseStorage {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

#[derive(Serialize)]
struct RemoveObjects<'a> {
    prefixes: &'a [String],
}

impl SupabaseStorage {
    pub fn new(http: reqwest::Client, base_url: &str, service_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }

    fn bucket_url(&self, bucket: &str) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, bucket)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, StorageError> {
        let resp = req
            .send()
            .await
            .map_err(|e| StorageError::Unreachable(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(map_status(status, body))
    }
}

fn map_status(status: StatusCode, body: String) -> StorageError {
    if status == StatusCode::NOT_FOUND {
        StorageError::NotFound
    } else {
        StorageError::Rejected {
            status: status.as_u16(),
            message: body,
        }
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let req = self
            .request(reqwest::Method::POST, &self.object_url(bucket, path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("cache-control", "max-age=3600")
            .header("x-upsert", "false")
            .body(bytes);

        self.send(req).await?;

        tracing::info!(bucket, path, "Uploaded object");

        Ok(StoredObject {
            bucket: bucket.to_string(),
            path: path.to_string(),
            public_url: self.public_url(bucket, path),
        })
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        if paths.is_empty() {
            return Ok(());
        }

        let req = self
            .request(reqwest::Method::DELETE, &self.bucket_url(bucket))
            .json(&RemoveObjects { prefixes: paths });

        self.send(req).await?;

        tracing::info!(bucket, count = paths.len(), "Removed objects");
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, path
        )
    }
}
