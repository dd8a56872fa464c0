use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    optional_date, optional_text, required, required_text, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Publication {
    pub id: Uuid,
    pub title: String,
    pub authors: String,
    pub publication_venue: Option<String>,
    pub publication_date: Option<NaiveDate>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PublicationForm {
    pub title: String,
    #[schema(example = "J. Doe, A. Smith")]
    pub authors: String,
    pub publication_venue: Option<String>,
    pub publication_date: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub url: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDraft {
    pub title: String,
    pub authors: String,
    pub publication_venue: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub abstract_text: Option<String>,
    pub url: Option<String>,
    pub display_order: i32,
    pub is_published: bool,
}

impl TryFrom<PublicationForm> for PublicationDraft {
    type Error = ValidationError;

    fn try_from(form: PublicationForm) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required_text("title", "Title", &form.title)?,
            authors: required_text("authors", "Authors", &form.authors)?,
            publication_venue: optional_text(form.publication_venue),
            publication_date: optional_date(
                "publication_date",
                "Publication date",
                form.publication_date,
            )?,
            abstract_text: optional_text(form.abstract_text),
            url: optional_text(form.url),
            display_order: required("display_order", "Display order", form.display_order)?,
            is_published: form.is_published,
        })
    }
}
