// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::project::adapter::outgoing::sea_orm_entity::{
    project_buttons, project_images, project_videos,
    projects::{Column, Entity},
};
use crate::project::application::domain::entities::{Project, ProjectChildren, ProjectListFilter};
use crate::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::shared::content::Visibility;
use crate::shared::db::contains_pattern;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn images(&self, project_id: Uuid) -> Result<Vec<project_images::Model>, DbErr> {
        project_images::Entity::find()
            .filter(project_images::Column::ProjectId.eq(project_id))
            .order_by_asc(project_images::Column::DisplayOrder)
            .all(&*self.db)
            .await
    }

    async fn videos(&self, project_id: Uuid) -> Result<Vec<project_videos::Model>, DbErr> {
        project_videos::Entity::find()
            .filter(project_videos::Column::ProjectId.eq(project_id))
            .order_by_asc(project_videos::Column::DisplayOrder)
            .all(&*self.db)
            .await
    }

    async fn buttons(&self, project_id: Uuid) -> Result<Vec<project_buttons::Model>, DbErr> {
        project_buttons::Entity::find()
            .filter(project_buttons::Column::ProjectId.eq(project_id))
            .order_by_asc(project_buttons::Column::DisplayOrder)
            .all(&*self.db)
            .await
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
        visibility: Visibility,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        let mut query = Entity::find();

        if visibility.published_only() {
            query = query.filter(Column::IsPublished.eq(true));
        }

        if let Some(featured) = filter.featured {
            query = query.filter(Column::IsFeatured.eq(featured));
        }

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category));
        }

        // Case-insensitive substring match on title and summary
        if let Some(search) = filter.search {
            let pattern = contains_pattern(&search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::ShortDescription).ilike(&pattern)),
            );
        }

        let rows = query
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn published_categories(&self) -> Result<Vec<String>, ProjectQueryError> {
        let categories = Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::IsPublished.eq(true))
            .filter(Column::Category.is_not_null())
            .order_by_asc(Column::Category)
            .into_tuple::<Option<String>>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // DISTINCT runs on raw values; padded duplicates collapse after trimming.
        let unique: BTreeSet<String> = categories
            .into_iter()
            .flatten()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        Ok(unique.into_iter().collect())
    }

    async fn get_by_id(
        &self,
        project_id: Uuid,
        visibility: Visibility,
    ) -> Result<Project, ProjectQueryError> {
        let mut query = Entity::find_by_id(project_id);
        if visibility.published_only() {
            query = query.filter(Column::IsPublished.eq(true));
        }

        query
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn get_children(&self, project_id: Uuid) -> Result<ProjectChildren, ProjectQueryError> {
        let (images, videos, buttons) = tokio::try_join!(
            self.images(project_id),
            self.videos(project_id),
            self.buttons(project_id),
        )
        .map_err(map_db_err)?;

        Ok(ProjectChildren {
            images: images.into_iter().map(|m| m.to_domain()).collect(),
            videos: videos.into_iter().map(|m| m.to_domain()).collect(),
            buttons: buttons.into_iter().map(|m| m.to_domain()).collect(),
        })
    }

    async fn related(&self, exclude: Uuid, limit: u64) -> Result<Vec<Project>, ProjectQueryError> {
        let rows = Entity::find()
            .filter(Column::IsPublished.eq(true))
            .filter(Column::IsFeatured.eq(true))
            .filter(Column::Id.ne(exclude))
            .order_by_asc(Column::DisplayOrder)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
