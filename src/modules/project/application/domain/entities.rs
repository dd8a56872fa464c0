use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{optional_text, required, required_text, ValidationError};

// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub short_description: Option<String>,
    /// HTML produced by the admin rich-text editor, stored verbatim.
    pub full_description: Option<String>,
    pub hero_image_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub is_featured: bool,
    pub category: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectImage {
    pub id: Uuid,
    pub project_id: Uuid,
    pub image_url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectVideo {
    pub id: Uuid,
    pub project_id: Uuid,
    pub video_url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectButton {
    pub id: Uuid,
    pub project_id: Uuid,
    pub label: String,
    pub url: String,
    pub button_type: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Child rows of one project, each list ordered by `display_order`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectChildren {
    pub images: Vec<ProjectImage>,
    pub videos: Vec<ProjectVideo>,
    pub buttons: Vec<ProjectButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(flatten)]
    pub children: ProjectChildren,
}

/// Detail page payload: the project, its media and buttons, and a few
/// other featured projects to browse next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(flatten)]
    pub children: ProjectChildren,
    pub related: Vec<Project>,
}

pub const RELATED_PROJECTS_LIMIT: u64 = 3;

// ──────────────────────────────────────────────────────────
// Listing filter
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub featured: Option<bool>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProjectListFilter {
    /// Blank values and the `all` category mean "no filter".
    pub fn new(featured: Option<bool>, category: Option<String>, search: Option<String>) -> Self {
        Self {
            featured,
            category: optional_text(category).filter(|c| !c.eq_ignore_ascii_case("all")),
            search: optional_text(search),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Admin form
// ──────────────────────────────────────────────────────────

/// The admin form sends tech stack as a comma-separated string; API
/// clients may send a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum TechStackInput {
    List(Vec<String>),
    Text(String),
}

impl Default for TechStackInput {
    fn default() -> Self {
        TechStackInput::List(Vec::new())
    }
}

impl TechStackInput {
    pub fn into_items(self) -> Vec<String> {
        let items: Vec<String> = match self {
            TechStackInput::List(items) => items,
            TechStackInput::Text(text) => text.split(',').map(str::to_string).collect(),
        };

        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ProjectImageForm {
    pub image_url: String,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ProjectVideoForm {
    pub video_url: String,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ProjectButtonForm {
    #[schema(example = "Live demo")]
    pub label: String,
    pub url: String,
    #[schema(example = "primary")]
    pub button_type: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ProjectForm {
    #[schema(example = "Portfolio API")]
    pub title: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub hero_image_url: Option<String>,
    #[schema(example = "Rust, Actix, Postgres")]
    pub tech_stack: TechStackInput,
    pub is_featured: bool,
    pub category: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: bool,
    pub images: Vec<ProjectImageForm>,
    pub videos: Vec<ProjectVideoForm>,
    pub buttons: Vec<ProjectButtonForm>,
}

// ──────────────────────────────────────────────────────────
// Validated drafts
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectImageDraft {
    pub image_url: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVideoDraft {
    pub video_url: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectButtonDraft {
    pub label: String,
    pub url: String,
    pub button_type: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub hero_image_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub is_featured: bool,
    pub category: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub images: Vec<ProjectImageDraft>,
    pub videos: Vec<ProjectVideoDraft>,
    pub buttons: Vec<ProjectButtonDraft>,
}

/// Children without an explicit order keep their position in the form.
fn position(explicit: Option<i32>, index: usize) -> i32 {
    explicit.unwrap_or_else(|| i32::try_from(index).unwrap_or(i32::MAX))
}

impl TryFrom<ProjectForm> for ProjectDraft {
    type Error = ValidationError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        let title = required_text("title", "Title", &form.title)?;
        let display_order = required("display_order", "Display order", form.display_order)?;

        let images = form
            .images
            .into_iter()
            .enumerate()
            .map(|(i, image)| {
                Ok(ProjectImageDraft {
                    image_url: required_text("images", "Image URL", &image.image_url)?,
                    display_order: position(image.display_order, i),
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let videos = form
            .videos
            .into_iter()
            .enumerate()
            .map(|(i, video)| {
                Ok(ProjectVideoDraft {
                    video_url: required_text("videos", "Video URL", &video.video_url)?,
                    display_order: position(video.display_order, i),
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let buttons = form
            .buttons
            .into_iter()
            .enumerate()
            .map(|(i, button)| {
                Ok(ProjectButtonDraft {
                    label: required_text("buttons", "Button label", &button.label)?,
                    url: required_text("buttons", "Button URL", &button.url)?,
                    button_type: optional_text(button.button_type),
                    display_order: position(button.display_order, i),
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self {
            title,
            short_description: optional_text(form.short_description),
            full_description: optional_text(form.full_description),
            hero_image_url: optional_text(form.hero_image_url),
            tech_stack: form.tech_stack.into_items(),
            is_featured: form.is_featured,
            category: optional_text(form.category),
            display_order,
            is_published: form.is_published,
            images,
            videos,
            buttons,
        })
    }
}
