use sea_orm::entity::prelude::*;

use crate::subscriber::application::domain::entities::Subscriber;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subscribers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub email: String,

    pub subscribed_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Subscriber {
        Subscriber {
            id: self.id,
            email: self.email,
            subscribed_at: self.subscribed_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
