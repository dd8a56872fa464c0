use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    optional_date, optional_text, required, required_text, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AchievementForm {
    #[schema(example = "Hackathon winner")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "2024-11-02")]
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDraft {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
}

impl TryFrom<AchievementForm> for AchievementDraft {
    type Error = ValidationError;

    fn try_from(form: AchievementForm) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required_text("title", "Title", &form.title)?,
            description: optional_text(form.description),
            date: optional_date("date", "Date", form.date)?,
            image_url: optional_text(form.image_url),
            certificate_url: optional_text(form.certificate_url),
            display_order: required("display_order", "Display order", form.display_order)?,
            is_published: form.is_published,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_order_are_enough() {
        let draft = AchievementDraft::try_from(AchievementForm {
            title: "Hackathon winner".into(),
            display_order: Some(3),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(draft.title, "Hackathon winner");
        assert_eq!(draft.date, None);
        assert!(!draft.is_published);
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = AchievementDraft::try_from(AchievementForm {
            display_order: Some(3),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn missing_display_order_is_rejected() {
        let err = AchievementDraft::try_from(AchievementForm {
            title: "Award".into(),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(err.field, "display_order");
    }
}
