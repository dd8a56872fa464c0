use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    optional_date, optional_text, required, required_date, required_text, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub grade: Option<String>,
    pub certificate_url: Option<String>,
    pub logo_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct EducationForm {
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    #[schema(example = "University of Somewhere")]
    pub institution: String,
    #[schema(example = "2016-09-01")]
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    #[schema(example = "3.8 GPA")]
    pub grade: Option<String>,
    pub certificate_url: Option<String>,
    pub logo_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub grade: Option<String>,
    pub certificate_url: Option<String>,
    pub logo_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
}

impl TryFrom<EducationForm> for EducationDraft {
    type Error = ValidationError;

    fn try_from(form: EducationForm) -> Result<Self, Self::Error> {
        let degree = required_text("degree", "Degree", &form.degree)?;
        let institution = required_text("institution", "Institution", &form.institution)?;
        let start_date = required_date("start_date", "Start date", form.start_date)?;
        // Ongoing studies never keep an end date.
        let end_date = if form.is_current {
            None
        } else {
            optional_date("end_date", "End date", form.end_date)?
        };

        Ok(Self {
            degree,
            institution,
            start_date,
            end_date,
            is_current: form.is_current,
            grade: optional_text(form.grade),
            certificate_url: optional_text(form.certificate_url),
            logo_url: optional_text(form.logo_url),
            display_order: required("display_order", "Display order", form.display_order)?,
            is_published: form.is_published,
        })
    }
}
