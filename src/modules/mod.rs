pub mod achievement;
pub mod auth;
pub mod certification;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod media;
pub mod message;
pub mod project;
pub mod publication;
pub mod resume;
pub mod site_settings;
pub mod skill;
pub mod subscriber;
