mod publication_repository_postgres;
pub mod sea_orm_entity;

pub use publication_repository_postgres::PublicationRepositoryPostgres;
