use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::adapter::outgoing::sea_orm_entity::{
    project_buttons, project_images, project_videos,
    projects::{ActiveModel, Column, Entity},
};
use crate::project::application::domain::entities::{
    ProjectButtonDraft, ProjectChildren, ProjectDetail, ProjectDraft, ProjectImageDraft,
    ProjectVideoDraft,
};
use crate::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert_project(
        txn: &DatabaseTransaction,
        draft: ProjectDraft,
    ) -> Result<ProjectDetail, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();
        let project_id = Uuid::new_v4();

        let ProjectDraft {
            images,
            videos,
            buttons,
            ..
        } = draft.clone();

        let mut model = project_fields(draft, now);
        model.id = Set(project_id);
        model.created_at = Set(now);

        let project = model.insert(txn).await.map_err(map_db_err)?;
        let children = insert_children(txn, project_id, images, videos, buttons, now).await?;

        Ok(ProjectDetail {
            project: project.to_domain(),
            children,
        })
    }

    async fn replace_project(
        txn: &DatabaseTransaction,
        project_id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectDetail, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let ProjectDraft {
            images,
            videos,
            buttons,
            ..
        } = draft.clone();

        let updated = Entity::update_many()
            .set(project_fields(draft, now))
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(txn)
            .await
            .map_err(map_db_err)?;

        let project = updated
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        delete_children(txn, project_id).await.map_err(map_db_err)?;
        let children = insert_children(txn, project_id, images, videos, buttons, now).await?;

        Ok(ProjectDetail {
            project: project.to_domain(),
            children,
        })
    }

    async fn remove_project(
        txn: &DatabaseTransaction,
        project_id: Uuid,
    ) -> Result<(), ProjectRepositoryError> {
        delete_children(txn, project_id).await.map_err(map_db_err)?;

        let result = Entity::delete_by_id(project_id)
            .exec(txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        draft: ProjectDraft,
    ) -> Result<ProjectDetail, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::insert_project(&txn, draft).await {
            Ok(detail) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(detail)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectDetail, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::replace_project(&txn, project_id, draft).await {
            Ok(detail) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(detail)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::remove_project(&txn, project_id).await {
            Ok(()) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(())
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Columns shared by insert and update. Leaves `id` and `created_at` unset.
fn project_fields(draft: ProjectDraft, now: DateTime<FixedOffset>) -> ActiveModel {
    ActiveModel {
        title: Set(draft.title.trim().to_string()),
        short_description: Set(draft.short_description),
        full_description: Set(draft.full_description),
        hero_image_url: Set(draft.hero_image_url),
        tech_stack: Set(Some(draft.tech_stack)),
        is_featured: Set(draft.is_featured),
        category: Set(draft.category),
        display_order: Set(draft.display_order),
        is_published: Set(draft.is_published),
        updated_at: Set(now),
        ..Default::default()
    }
}

async fn delete_children(txn: &DatabaseTransaction, project_id: Uuid) -> Result<(), DbErr> {
    project_images::Entity::delete_many()
        .filter(project_images::Column::ProjectId.eq(project_id))
        .exec(txn)
        .await?;
    project_videos::Entity::delete_many()
        .filter(project_videos::Column::ProjectId.eq(project_id))
        .exec(txn)
        .await?;
    project_buttons::Entity::delete_many()
        .filter(project_buttons::Column::ProjectId.eq(project_id))
        .exec(txn)
        .await?;
    Ok(())
}

async fn insert_children(
    txn: &DatabaseTransaction,
    project_id: Uuid,
    images: Vec<ProjectImageDraft>,
    videos: Vec<ProjectVideoDraft>,
    buttons: Vec<ProjectButtonDraft>,
    now: DateTime<FixedOffset>,
) -> Result<ProjectChildren, ProjectRepositoryError> {
    let image_rows: Vec<project_images::Model> = images
        .into_iter()
        .map(|d| project_images::Model {
            id: Uuid::new_v4(),
            project_id,
            image_url: d.image_url,
            display_order: d.display_order,
            created_at: now,
        })
        .collect();

    let video_rows: Vec<project_videos::Model> = videos
        .into_iter()
        .map(|d| project_videos::Model {
            id: Uuid::new_v4(),
            project_id,
            video_url: d.video_url,
            display_order: d.display_order,
            created_at: now,
        })
        .collect();

    let button_rows: Vec<project_buttons::Model> = buttons
        .into_iter()
        .map(|d| project_buttons::Model {
            id: Uuid::new_v4(),
            project_id,
            label: d.label,
            url: d.url,
            button_type: d.button_type,
            display_order: d.display_order,
            created_at: now,
        })
        .collect();

    // insert_many rejects an empty batch
    if !image_rows.is_empty() {
        project_images::Entity::insert_many(
            image_rows
                .iter()
                .cloned()
                .map(|m| m.into_active_model().reset_all()),
        )
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;
    }

    if !video_rows.is_empty() {
        project_videos::Entity::insert_many(
            video_rows
                .iter()
                .cloned()
                .map(|m| m.into_active_model().reset_all()),
        )
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;
    }

    if !button_rows.is_empty() {
        project_buttons::Entity::insert_many(
            button_rows
                .iter()
                .cloned()
                .map(|m| m.into_active_model().reset_all()),
        )
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;
    }

    Ok(ProjectChildren {
        images: image_rows.into_iter().map(|m| m.to_domain()).collect(),
        videos: video_rows.into_iter().map(|m| m.to_domain()).collect(),
        buttons: button_rows.into_iter().map(|m| m.to_domain()).collect(),
    })
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}
