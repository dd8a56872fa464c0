use sea_orm::entity::prelude::*;

use crate::experience::application::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub company_name: String,

    pub role: String,

    pub start_date: Date,

    pub end_date: Option<Date>,

    pub is_current: bool,

    pub description: Option<String>,

    pub certificate_url: Option<String>,

    pub logo_url: Option<String>,

    pub display_order: i32,

    pub is_published: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Experience {
        Experience {
            id: self.id,
            company_name: self.company_name,
            role: self.role,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            description: self.description,
            certificate_url: self.certificate_url,
            logo_url: self.logo_url,
            display_order: self.display_order,
            is_published: self.is_published,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // No update trigger on this table.
        if !insert {
            self.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
        }
        Ok(self)
    }
}
