use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::dashboard::application::domain::entities::{DashboardStats, RECENT_MESSAGE_LIMIT};
use crate::dashboard::application::ports::{DashboardQuery, DashboardQueryError};
use crate::message::adapter::outgoing::sea_orm_entity as messages;
use crate::project::adapter::outgoing::sea_orm_entity::projects;
use crate::skill::adapter::outgoing::sea_orm_entity as skills;
use crate::subscriber::adapter::outgoing::sea_orm_entity as subscribers;

/// Counts are independent queries; they are not taken from one snapshot.
#[derive(Debug, Clone)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> DashboardQueryError {
    DashboardQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn stats(&self) -> Result<DashboardStats, DashboardQueryError> {
        let db = &*self.db;

        let (
            total_projects,
            total_messages,
            unread_messages,
            total_subscribers,
            total_skills,
            recent,
        ) = tokio::try_join!(
            projects::Entity::find().count(db),
            messages::Entity::find().count(db),
            messages::Entity::find()
                .filter(messages::Column::IsRead.eq(false))
                .count(db),
            subscribers::Entity::find().count(db),
            skills::Entity::find().count(db),
            messages::Entity::find()
                .order_by_desc(messages::Column::CreatedAt)
                .limit(RECENT_MESSAGE_LIMIT)
                .all(db),
        )
        .map_err(map_db_err)?;

        Ok(DashboardStats {
            total_projects,
            total_messages,
            unread_messages,
            total_subscribers,
            total_skills,
            recent_messages: recent.into_iter().map(|m| m.to_domain()).collect(),
        })
    }
}
