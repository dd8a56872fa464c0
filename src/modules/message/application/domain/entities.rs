use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{is_valid_email, min_chars, required_text, ValidationError};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct MessageForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<MessageForm> for MessageDraft {
    type Error = ValidationError;

    fn try_from(form: MessageForm) -> Result<Self, Self::Error> {
        let name = required_text("name", "Name", &form.name)?;
        min_chars("name", "Name", &name, MIN_NAME_CHARS)?;

        let email = required_text("email", "Email", &form.email)?;
        if !is_valid_email(&email) {
            return Err(ValidationError::new("email", "Invalid email address"));
        }

        let message = required_text("message", "Message", &form.message)?;
        min_chars("message", "Message", &message, MIN_MESSAGE_CHARS)?;

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

/// Inbox search; blank means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSearch(Option<String>);

impl MessageSearch {
    pub fn new(term: Option<String>) -> Self {
        Self(
            term.map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        )
    }

    pub fn term(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
