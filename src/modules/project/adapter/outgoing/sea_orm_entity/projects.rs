use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::project::application::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,

    /// Rich-text HTML.
    #[sea_orm(column_type = "Text", nullable)]
    pub full_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub hero_image_url: Option<String>,

    // text[]
    pub tech_stack: Option<Vec<String>>,

    pub is_featured: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,

    pub display_order: i32,

    pub is_published: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            short_description: self.short_description,
            full_description: self.full_description,
            hero_image_url: self.hero_image_url,
            tech_stack: self.tech_stack.unwrap_or_default(),
            is_featured: self.is_featured,
            category: self.category,
            display_order: self.display_order,
            is_published: self.is_published,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_images::Entity")]
    ProjectImages,

    #[sea_orm(has_many = "super::project_videos::Entity")]
    ProjectVideos,

    #[sea_orm(has_many = "super::project_buttons::Entity")]
    ProjectButtons,
}

impl Related<super::project_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectImages.def()
    }
}

impl Related<super::project_videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectVideos.def()
    }
}

impl Related<super::project_buttons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectButtons.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
