use sea_orm::entity::prelude::*;

use crate::certification::application::domain::entities::Certification;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub certificate_name: String,
    pub provider: String,
    pub issue_date: Date,
    pub expiry_date: Option<Date>,
    pub certificate_image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Certification {
        Certification {
            id: self.id,
            certificate_name: self.certificate_name,
            provider: self.provider,
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            certificate_image_url: self.certificate_image_url,
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
