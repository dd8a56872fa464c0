use sea_orm::entity::prelude::*;

use crate::resume::application::domain::entities::Resume;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resume")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub file_url: String,
    pub filename: String,
    pub uploaded_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Resume {
        Resume {
            id: self.id,
            file_url: self.file_url,
            filename: self.filename,
            uploaded_at: self.uploaded_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
