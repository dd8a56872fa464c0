mod settings_repository_postgres;
pub mod sea_orm_entity;

pub use settings_repository_postgres::SettingsRepositoryPostgres;
