use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::content::{ContentRepository, ContentRepositoryError, Visibility};
use crate::shared::db::is_missing_row;
use crate::skill::application::domain::entities::{Skill, SkillDraft};

use super::sea_orm_entity::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as SkillEntity,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(id: Uuid, draft: SkillDraft) -> SkillActiveModel {
        SkillActiveModel {
            id: Set(id),
            skill_name: Set(draft.skill_name),
            category: Set(draft.category),
            proficiency_level: Set(draft.proficiency_level),
            icon_url: Set(draft.icon_url),
            display_order: Set(draft.display_order),
            is_published: Set(draft.is_published),
            created_at: NotSet,
        }
    }
}

#[async_trait]
impl ContentRepository<Skill, SkillDraft> for SkillRepositoryPostgres {
    /// The site orders by display order alone; the admin list groups by
    /// category first.
    async fn list(&self, visibility: Visibility) -> Result<Vec<Skill>, ContentRepositoryError> {
        let mut query = SkillEntity::find();
        if visibility.published_only() {
            query = query.filter(SkillColumn::IsPublished.eq(true));
        } else {
            query = query.order_by_asc(SkillColumn::Category);
        }

        query
            .order_by_asc(SkillColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(|m| m.to_domain()).collect())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn create(&self, draft: SkillDraft) -> Result<Skill, ContentRepositoryError> {
        Self::active_model(Uuid::new_v4(), draft)
            .insert(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, ContentRepositoryError> {
        Self::active_model(id, draft)
            .update(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(|e| match e {
                e if is_missing_row(&e) => ContentRepositoryError::NotFound,
                e => ContentRepositoryError::DatabaseError(e.to_string()),
            })
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let result = SkillEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        match result.rows_affected {
            0 => Err(ContentRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::sea_orm_entity::Model as SkillModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(name: &str, category: &str, order: i32) -> SkillModel {
        SkillModel {
            id: Uuid::new_v4(),
            skill_name: name.into(),
            category: Some(category.into()),
            proficiency_level: 4,
            icon_url: None,
            display_order: order,
            is_published: true,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_category_then_display_order() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![
                    model("Postgres", "Database", 0),
                    model("Rust", "Programming Languages", 0),
                ]])
                .into_connection(),
        );
        let repo = SkillRepositoryPostgres::new(db.clone());

        let rows = repo.list(Visibility::All).await.unwrap();
        assert_eq!(rows.len(), 2);
        drop(repo);

        let log = format!(
            "{:?}",
            Arc::try_unwrap(db).unwrap().into_transaction_log()
        );
        assert!(log.contains("ORDER BY \\\"skills\\\".\\\"category\\\" ASC, \\\"skills\\\".\\\"display_order\\\" ASC"));
        assert!(!log.contains("is_published\\\" = "));
    }

    #[tokio::test]
    async fn test_published_list_orders_by_display_order_only() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![
                    model("Rust", "Programming Languages", 0),
                    model("Postgres", "Database", 1),
                ]])
                .into_connection(),
        );
        let repo = SkillRepositoryPostgres::new(db.clone());

        let rows = repo.list(Visibility::Published).await.unwrap();
        assert_eq!(rows[0].skill_name, "Rust");
        drop(repo);

        let log = format!(
            "{:?}",
            Arc::try_unwrap(db).unwrap().into_transaction_log()
        );
        assert!(log.contains("ORDER BY \\\"skills\\\".\\\"display_order\\\" ASC"));
        assert!(!log.contains("\\\"category\\\" ASC"));
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Rust", "Backend", 1)]])
            .into_connection();
        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        let skill = repo
            .create(SkillDraft {
                skill_name: "Rust".into(),
                category: Some("Backend".into()),
                proficiency_level: 4,
                icon_url: None,
                display_order: 1,
                is_published: true,
            })
            .await
            .unwrap();
        assert_eq!(skill.skill_name, "Rust");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(ContentRepositoryError::NotFound)
        ));
    }
}
