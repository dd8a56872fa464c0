use async_trait::async_trait;

use super::domain::entities::{SettingKey, SettingsMap, SettingsUpdate, SiteSetting};

// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<SiteSetting>, SettingsRepositoryError>;

    async fn find(&self, key: &str) -> Result<Option<SiteSetting>, SettingsRepositoryError>;

    /// Writes every entry, updating existing rows and inserting missing ones.
    async fn save(
        &self,
        entries: Vec<(SettingKey, Option<String>)>,
    ) -> Result<(), SettingsRepositoryError>;
}

// ──────────────────────────────────────────────────────────
// Incoming port
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Setting not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SettingsRepositoryError> for SettingsError {
    fn from(err: SettingsRepositoryError) -> Self {
        match err {
            SettingsRepositoryError::DatabaseError(msg) => SettingsError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait SettingsUseCase: Send + Sync {
    async fn all(&self) -> Result<SettingsMap, SettingsError>;

    async fn get(&self, key: &str) -> Result<SiteSetting, SettingsError>;

    /// Applies the batch and returns the resulting map.
    async fn update(&self, update: SettingsUpdate) -> Result<SettingsMap, SettingsError>;
}
