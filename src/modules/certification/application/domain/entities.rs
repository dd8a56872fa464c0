use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    optional_date, optional_text, required, required_date, required_text, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Certification {
    pub id: Uuid,
    pub certificate_name: String,
    pub provider: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CertificationForm {
    #[schema(example = "AWS Certified Developer")]
    pub certificate_name: String,
    #[schema(example = "Amazon Web Services")]
    pub provider: String,
    #[schema(example = "2023-03-15")]
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub certificate_image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationDraft {
    pub certificate_name: String,
    pub provider: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
}

impl TryFrom<CertificationForm> for CertificationDraft {
    type Error = ValidationError;

    fn try_from(form: CertificationForm) -> Result<Self, Self::Error> {
        Ok(Self {
            certificate_name: required_text(
                "certificate_name",
                "Certificate name",
                &form.certificate_name,
            )?,
            provider: required_text("provider", "Provider", &form.provider)?,
            issue_date: required_date("issue_date", "Issue date", form.issue_date)?,
            expiry_date: optional_date("expiry_date", "Expiry date", form.expiry_date)?,
            certificate_image_url: optional_text(form.certificate_image_url),
            certificate_url: optional_text(form.certificate_url),
            display_order: required("display_order", "Display order", form.display_order)?,
            is_published: form.is_published,
        })
    }
}
