use async_trait::async_trait;
use tracing::info;

use super::domain::entities::{settings_map, SettingsMap, SettingsUpdate, SiteSetting};
use super::ports::{SettingsError, SettingsRepository, SettingsUseCase};

#[derive(Debug, Clone)]
pub struct SettingsService<R> {
    repository: R,
}

impl<R> SettingsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SettingsRepository> SettingsUseCase for SettingsService<R> {
    async fn all(&self) -> Result<SettingsMap, SettingsError> {
        Ok(settings_map(self.repository.all().await?))
    }

    async fn get(&self, key: &str) -> Result<SiteSetting, SettingsError> {
        self.repository
            .find(key)
            .await?
            .ok_or(SettingsError::NotFound)
    }

    async fn update(&self, update: SettingsUpdate) -> Result<SettingsMap, SettingsError> {
        let keys: Vec<&str> = update.entries().iter().map(|(k, _)| k.as_str()).collect();
        info!(keys = ?keys, "Updating site settings");

        self.repository.save(update.into_entries()).await?;
        self.all().await
    }
}
