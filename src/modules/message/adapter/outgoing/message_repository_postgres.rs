use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::message::application::domain::entities::{Message, MessageDraft, MessageSearch};
use crate::message::application::ports::{MessageRepository, MessageRepositoryError};
use crate::shared::db::{contains_pattern, is_missing_row};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn insert(&self, draft: MessageDraft) -> Result<Message, MessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            email: Set(draft.email),
            message: Set(draft.message),
            is_read: Set(false),
            created_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn list(
        &self,
        search: MessageSearch,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageRepositoryError> {
        let mut query = Entity::find();

        if let Some(term) = search.term() {
            let pattern = contains_pattern(term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::Email).ilike(&pattern))
                    .add(Expr::col(Column::Message).ilike(&pattern)),
            );
        }

        let paginator = query
            .order_by_desc(Column::CreatedAt)
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

    async fn mark_read(&self, id: Uuid) -> Result<Message, MessageRepositoryError> {
        let model = ActiveModel {
            id: Set(id),
            is_read: Set(true),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(|e| {
            if is_missing_row(&e) {
                MessageRepositoryError::NotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}
