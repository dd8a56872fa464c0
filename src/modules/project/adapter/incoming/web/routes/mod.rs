mod create_project;
mod get_project_categories;
mod get_public_single_project;
mod get_single_project;
mod hard_delete_project;
mod list_projects;
mod update_project;

pub use create_project::*;
pub use get_project_categories::*;
pub use get_public_single_project::*;
pub use get_single_project::*;
pub use hard_delete_project::*;
pub use list_projects::*;
pub use update_project::*;
