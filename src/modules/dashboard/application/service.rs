use async_trait::async_trait;

use super::domain::entities::DashboardStats;
use super::ports::{DashboardError, DashboardQuery, DashboardUseCase};

#[derive(Debug, Clone)]
pub struct DashboardService<Q> {
    query: Q,
}

impl<Q> DashboardService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: DashboardQuery> DashboardUseCase for DashboardService<Q> {
    async fn stats(&self) -> Result<DashboardStats, DashboardError> {
        Ok(self.query.stats().await?)
    }
}
