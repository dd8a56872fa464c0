use chrono::Utc;
use uuid::Uuid;

use crate::project::application::domain::entities::{
    Project, ProjectButton, ProjectButtonDraft, ProjectChildren, ProjectDetail, ProjectDraft,
    ProjectImage, ProjectImageDraft,
};

pub fn sample_project(title: &str) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        short_description: Some(format!("{} in short", title)),
        full_description: Some("<p>Long form</p>".to_string()),
        hero_image_url: None,
        tech_stack: vec!["Rust".to_string(), "Postgres".to_string()],
        is_featured: true,
        category: Some("Web".to_string()),
        display_order: 1,
        is_published: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_children(project_id: Uuid) -> ProjectChildren {
    ProjectChildren {
        images: vec![ProjectImage {
            id: Uuid::new_v4(),
            project_id,
            image_url: "https://cdn.example.com/shot.png".to_string(),
            display_order: 0,
            created_at: Utc::now(),
        }],
        videos: vec![],
        buttons: vec![ProjectButton {
            id: Uuid::new_v4(),
            project_id,
            label: "Source".to_string(),
            url: "https://github.com/example/api".to_string(),
            button_type: Some("secondary".to_string()),
            display_order: 0,
            created_at: Utc::now(),
        }],
    }
}

pub fn sample_detail(title: &str) -> ProjectDetail {
    let project = sample_project(title);
    let children = sample_children(project.id);
    ProjectDetail { project, children }
}

pub fn sample_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        short_description: None,
        full_description: None,
        hero_image_url: None,
        tech_stack: vec!["Rust".to_string()],
        is_featured: false,
        category: None,
        display_order: 1,
        is_published: false,
        images: vec![],
        videos: vec![],
        buttons: vec![],
    }
}

/// Draft carrying one image and one button.
pub fn sample_draft_with_children(title: &str) -> ProjectDraft {
    ProjectDraft {
        images: vec![ProjectImageDraft {
            image_url: "https://cdn.example.com/shot.png".to_string(),
            display_order: 0,
        }],
        buttons: vec![ProjectButtonDraft {
            label: "Live".to_string(),
            url: "https://example.com".to_string(),
            button_type: Some("primary".to_string()),
            display_order: 0,
        }],
        ..sample_draft(title)
    }
}
