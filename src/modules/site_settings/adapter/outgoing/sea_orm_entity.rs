use sea_orm::entity::prelude::*;

use crate::site_settings::application::domain::entities::SiteSetting;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub setting_key: String,
    pub setting_value: Option<String>,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> SiteSetting {
        SiteSetting {
            setting_key: self.setting_key,
            setting_value: self.setting_value,
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
