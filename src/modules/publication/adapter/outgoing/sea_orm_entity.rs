use sea_orm::entity::prelude::*;

use crate::publication::application::domain::entities::Publication;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "publications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub authors: String,
    pub publication_venue: Option<String>,
    pub publication_date: Option<Date>,
    #[sea_orm(column_name = "abstract")]
    pub abstract_text: Option<String>,
    pub url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Publication {
        Publication {
            id: self.id,
            title: self.title,
            authors: self.authors,
            publication_venue: self.publication_venue,
            publication_date: self.publication_date,
            abstract_text: self.abstract_text,
            url: self.url,
            display_order: self.display_order,
            is_published: self.is_published,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
