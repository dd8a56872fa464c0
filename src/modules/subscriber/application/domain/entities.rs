use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{is_valid_email, required_text, ValidationError};

/// A newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SubscribeForm {
    pub email: String,
}

/// Normalized address ready for insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberDraft {
    pub email: String,
}

impl TryFrom<SubscribeForm> for SubscriberDraft {
    type Error = ValidationError;

    fn try_from(form: SubscribeForm) -> Result<Self, Self::Error> {
        let email = required_text("email", "Email", &form.email)?.to_lowercase();
        if !is_valid_email(&email) {
            return Err(ValidationError::new(
                "email",
                "Please enter a valid email address",
            ));
        }
        Ok(Self { email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let draft = SubscriberDraft::try_from(SubscribeForm {
            email: "  Reader@Example.COM ".into(),
        })
        .unwrap();
        assert_eq!(draft.email, "reader@example.com");
    }

    #[test]
    fn blank_email_is_required() {
        let err = SubscriberDraft::try_from(SubscribeForm::default()).unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let err = SubscriberDraft::try_from(SubscribeForm {
            email: "reader@".into(),
        })
        .unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }
}
