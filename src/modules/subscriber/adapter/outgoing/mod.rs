mod subscriber_repository_postgres;
pub mod sea_orm_entity;

pub use subscriber_repository_postgres::SubscriberRepositoryPostgres;
