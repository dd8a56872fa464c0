use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::db::{contains_pattern, is_unique_violation};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::subscriber::application::domain::entities::{Subscriber, SubscriberDraft};
use crate::subscriber::application::ports::{SubscriberRepository, SubscriberRepositoryError};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SubscriberRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriberRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SubscriberRepositoryError {
    SubscriberRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SubscriberRepository for SubscriberRepositoryPostgres {
    async fn insert(
        &self,
        draft: SubscriberDraft,
    ) -> Result<Subscriber, SubscriberRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(draft.email),
            subscribed_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                SubscriberRepositoryError::DuplicateEmail
            } else {
                map_db_err(e)
            }
        })?;

        Ok(inserted.to_domain())
    }

    async fn list(
        &self,
        search: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Subscriber>, SubscriberRepositoryError> {
        let mut query = Entity::find();

        if let Some(term) = search {
            query = query.filter(Expr::col(Column::Email).ilike(contains_pattern(&term)));
        }

        let paginator = query
            .order_by_desc(Column::SubscribedAt)
            .paginate(&*self.db, u64::from(page.per_page));

        let total = paginator.num_items().await.map_err(map_db_err)?;
        let rows = paginator
            .fetch_page(page.index())
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            rows.into_iter().map(|m| m.to_domain()).collect(),
            page,
            total,
        ))
    }

    async fn all(&self) -> Result<Vec<Subscriber>, SubscriberRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::SubscribedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), SubscriberRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SubscriberRepositoryError::NotFound);
        }
        Ok(())
    }
}
