use sea_orm::entity::prelude::*;

use crate::achievement::application::domain::entities::Achievement;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<Date>,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Achievement {
        Achievement {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            image_url: self.image_url,
            certificate_url: self.certificate_url,
            display_order: self.display_order,
            is_published: self.is_published,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
