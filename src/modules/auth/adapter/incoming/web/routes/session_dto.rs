use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{AdminProfile, AuthSession};

#[derive(Serialize, ToSchema)]
pub struct AdminProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "Jane Doe")]
    pub name: Option<String>,

    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl From<AdminProfile> for AdminProfileResponse {
    fn from(profile: AdminProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email,
            name: profile.name,
            last_sign_in_at: profile.last_sign_in_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    /// Access token issued by the auth service (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Single-use refresh token
    #[schema(example = "v1.MRjRZbWx3aWtlS2V5...")]
    pub refresh_token: String,

    /// Seconds until the access token expires
    #[schema(example = 3600)]
    pub expires_in: i64,

    pub expires_at: DateTime<Utc>,

    pub admin: AdminProfileResponse,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            expires_at: session.expires_at,
            admin: session.admin.into(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_session() -> AuthSession {
    AuthSession {
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        expires_in: 3600,
        expires_at: Utc::now() + chrono::Duration::hours(1),
        admin: AdminProfile {
            id: uuid::Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            name: Some("Jane Doe".to_string()),
            last_sign_in_at: None,
        },
    }
}
