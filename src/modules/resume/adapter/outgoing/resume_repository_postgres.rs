use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::resume::application::domain::entities::{NewResume, Resume};
use crate::resume::application::ports::{ResumeRepository, ResumeRepositoryError};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct ResumeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn swap_rows(
        txn: &DatabaseTransaction,
        previous: Option<Uuid>,
        resume: NewResume,
    ) -> Result<Resume, ResumeRepositoryError> {
        // A previous row already gone is fine; the insert still replaces it.
        if let Some(id) = previous {
            Entity::delete_by_id(id)
                .exec(txn)
                .await
                .map_err(map_db_err)?;
        }

        let inserted = ActiveModel {
            id: Set(Uuid::new_v4()),
            file_url: Set(resume.file_url),
            filename: Set(resume.filename),
            uploaded_at: NotSet,
        }
        .insert(txn)
        .await
        .map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }
}

fn map_db_err(e: DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryPostgres {
    async fn latest(&self) -> Result<Option<Resume>, ResumeRepositoryError> {
        let row = Entity::find()
            .order_by_desc(Column::UploadedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn swap(
        &self,
        previous: Option<Uuid>,
        resume: NewResume,
    ) -> Result<Resume, ResumeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::swap_rows(&txn, previous, resume).await {
            Ok(stored) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(stored)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ResumeRepositoryError::NotFound);
        }
        Ok(())
    }
}
