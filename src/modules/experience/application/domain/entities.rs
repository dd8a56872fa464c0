use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    optional_date, optional_text, required, required_date, required_text, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub company_name: String,
    pub role: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
    pub logo_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Experience form as submitted by the admin.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceForm {
    #[schema(example = "Acme Corp")]
    pub company_name: String,
    #[schema(example = "Backend Engineer")]
    pub role: String,
    #[schema(example = "2022-03-01")]
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
    pub logo_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub company_name: String,
    pub role: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
    pub logo_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
}

impl TryFrom<ExperienceForm> for ExperienceDraft {
    type Error = ValidationError;

    fn try_from(form: ExperienceForm) -> Result<Self, Self::Error> {
        let company_name = required_text("company_name", "Company name", &form.company_name)?;
        let role = required_text("role", "Role", &form.role)?;
        let start_date = required_date("start_date", "Start date", form.start_date)?;
        let end_date = if form.is_current {
            None
        } else {
            optional_date("end_date", "End date", form.end_date)?
        };
        let display_order = required("display_order", "Display order", form.display_order)?;

        Ok(Self {
            company_name,
            role,
            start_date,
            end_date,
            is_current: form.is_current,
            description: optional_text(form.description),
            certificate_url: optional_text(form.certificate_url),
            logo_url: optional_text(form.logo_url),
            display_order,
            is_published: form.is_published,
        })
    }
}
