pub mod sea_orm_entity;
mod skill_repository_postgres;

pub use skill_repository_postgres::SkillRepositoryPostgres;
