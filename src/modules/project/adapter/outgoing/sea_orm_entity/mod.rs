pub mod project_buttons;
pub mod project_images;
pub mod project_videos;
pub mod projects;
