use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{optional_text, required, required_text, ValidationError};

/// Grouping offered by the admin skill form.
pub const SKILL_CATEGORIES: [&str; 8] = [
    "Programming Languages",
    "Technologies & Framework",
    "Backend",
    "Database",
    "DevOps",
    "Tools",
    "Soft Skills",
    "Other",
];

pub const MIN_PROFICIENCY: i32 = 1;
pub const MAX_PROFICIENCY: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub skill_name: String,
    pub category: Option<String>,
    /// 1 (beginner) to 5 (expert).
    pub proficiency_level: i32,
    pub icon_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SkillForm {
    #[schema(example = "Rust")]
    pub skill_name: String,
    #[schema(example = "Programming Languages")]
    pub category: Option<String>,
    #[schema(example = 4)]
    pub proficiency_level: Option<i32>,
    pub icon_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub skill_name: String,
    pub category: Option<String>,
    pub proficiency_level: i32,
    pub icon_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
}

impl TryFrom<SkillForm> for SkillDraft {
    type Error = ValidationError;

    fn try_from(form: SkillForm) -> Result<Self, Self::Error> {
        let skill_name = required_text("skill_name", "Skill name", &form.skill_name)?;
        let proficiency_level =
            required("proficiency_level", "Proficiency level", form.proficiency_level)?;
        if !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&proficiency_level) {
            return Err(ValidationError::new(
                "proficiency_level",
                format!(
                    "Proficiency level must be between {} and {}",
                    MIN_PROFICIENCY, MAX_PROFICIENCY
                ),
            ));
        }

        Ok(Self {
            skill_name,
            category: optional_text(form.category),
            proficiency_level,
            icon_url: optional_text(form.icon_url),
            display_order: required("display_order", "Display order", form.display_order)?,
            is_published: form.is_published,
        })
    }
}
