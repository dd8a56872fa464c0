use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::site_settings::application::domain::entities::{SettingKey, SiteSetting};
use crate::site_settings::application::ports::{SettingsRepository, SettingsRepositoryError};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn write_entries(
        txn: &DatabaseTransaction,
        entries: Vec<(SettingKey, Option<String>)>,
    ) -> Result<(), SettingsRepositoryError> {
        let now = Utc::now().fixed_offset();

        for (key, value) in entries {
            let existing = Entity::find()
                .filter(Column::SettingKey.eq(key.as_str()))
                .one(txn)
                .await
                .map_err(map_db_err)?;

            match existing {
                Some(row) => {
                    ActiveModel {
                        id: Set(row.id),
                        setting_value: Set(value),
                        updated_at: Set(now),
                        ..Default::default()
                    }
                    .update(txn)
                    .await
                    .map_err(map_db_err)?;
                }
                None => {
                    ActiveModel {
                        id: Set(Uuid::new_v4()),
                        setting_key: Set(key.as_str().to_string()),
                        setting_value: Set(value),
                        updated_at: Set(now),
                    }
                    .insert(txn)
                    .await
                    .map_err(map_db_err)?;
                }
            }
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn all(&self) -> Result<Vec<SiteSetting>, SettingsRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SettingKey)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn find(&self, key: &str) -> Result<Option<SiteSetting>, SettingsRepositoryError> {
        let row = Entity::find()
            .filter(Column::SettingKey.eq(key))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn save(
        &self,
        entries: Vec<(SettingKey, Option<String>)>,
    ) -> Result<(), SettingsRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::write_entries(&txn, entries).await {
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
