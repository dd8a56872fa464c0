pub mod app_state_builder;
pub mod auth_helper;
pub mod mocks;
pub mod project_test_fixtures;
pub mod stubs;
