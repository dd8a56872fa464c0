use async_trait::async_trait;

use super::domain::entities::DashboardStats;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, DashboardQueryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<DashboardQueryError> for DashboardError {
    fn from(err: DashboardQueryError) -> Self {
        match err {
            DashboardQueryError::DatabaseError(msg) => DashboardError::QueryError(msg),
        }
    }
}

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, DashboardError>;
}
