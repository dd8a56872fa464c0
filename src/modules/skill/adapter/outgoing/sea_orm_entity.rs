use sea_orm::entity::prelude::*;

use crate::skill::application::domain::entities::Skill;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub skill_name: String,
    pub category: Option<String>,
    pub proficiency_level: i32,
    pub icon_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Skill {
        Skill {
            id: self.id,
            skill_name: self.skill_name,
            category: self.category,
            proficiency_level: self.proficiency_level,
            icon_url: self.icon_url,
            display_order: self.display_order,
            is_published: self.is_published,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
