use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{AdminProfile, AuthSession},
    ports::outgoing::{AuthGateway, AuthGatewayError},
};

/// REST client for the hosted auth service (`/auth/v1`).
#[derive(Clone)]
pub struct SupabaseAuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

// ──────────────────────────────────────────────────────────
// Wire types
// ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct PasswordUpdate<'a> {
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    #[serde(default)]
    expires_at: Option<i64>,
    user: UserResponse,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
    #[serde(default)]
    last_sign_in_at: Option<DateTime<Utc>>,
}

/// Error bodies differ between endpoints and service versions.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn code(&self) -> Option<&str> {
        self.error_code.as_deref().or(self.error.as_deref())
    }

    fn text(&self) -> String {
        self.error_description
            .as_deref()
            .or(self.msg.as_deref())
            .or(self.message.as_deref())
            .or(self.error.as_deref())
            .unwrap_or("unknown error")
            .to_string()
    }
}

impl From<UserResponse> for AdminProfile {
    fn from(user: UserResponse) -> Self {
        let metadata = user.user_metadata.unwrap_or_default();
        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
            name: metadata.name.or(metadata.full_name),
            last_sign_in_at: user.last_sign_in_at,
        }
    }
}

impl TokenResponse {
    fn into_session(self) -> AuthSession {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(|| Utc::now() + Duration::seconds(self.expires_in));

        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in,
            expires_at,
            admin: self.user.into(),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Grant {
    Password,
    Refresh,
}

impl SupabaseAuthClient {
    pub fn new(http: reqwest::Client, base_url: &str, anon_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.anon_key)
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        grant: Option<Grant>,
    ) -> Result<reqwest::Response, AuthGatewayError> {
        let resp = req
            .send()
            .await
            .map_err(|e| AuthGatewayError::Unreachable(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body: ErrorBody = resp.json().await.unwrap_or_default();
        Err(map_failure(status, &body, grant))
    }

    async fn token(
        &self,
        grant: Grant,
        body: serde_json::Value,
    ) -> Result<AuthSession, AuthGatewayError> {
        let path = match grant {
            Grant::Password => "token?grant_type=password",
            Grant::Refresh => "token?grant_type=refresh_token",
        };

        let resp = self
            .send(
                self.request(reqwest::Method::POST, path).json(&body),
                Some(grant),
            )
            .await?;

        let tokens: TokenResponse = resp
            .json()
            .await
            .map_err(|e| AuthGatewayError::Provider(format!("Unexpected token response: {}", e)))?;

        Ok(tokens.into_session())
    }
}

fn map_failure(status: StatusCode, body: &ErrorBody, grant: Option<Grant>) -> AuthGatewayError {
    match (status, grant) {
        (StatusCode::BAD_REQUEST, Some(Grant::Password)) if is_invalid_grant(body) => {
            AuthGatewayError::InvalidCredentials
        }
        (StatusCode::BAD_REQUEST, Some(Grant::Refresh)) if is_invalid_grant(body) => {
            AuthGatewayError::InvalidRefreshToken
        }
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => AuthGatewayError::Unauthorized,
        (StatusCode::UNPROCESSABLE_ENTITY, None) => AuthGatewayError::PasswordRejected(body.text()),
        _ => AuthGatewayError::Provider(format!("{} {}", status.as_u16(), body.text())),
    }
}

fn is_invalid_grant(body: &ErrorBody) -> bool {
    matches!(
        body.code(),
        Some("invalid_grant" | "invalid_credentials" | "refresh_token_not_found"
            | "refresh_token_already_used")
    )
}

#[async_trait]
impl AuthGateway for SupabaseAuthClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthGatewayError> {
        let body = serde_json::to_value(PasswordGrant { email, password })
            .map_err(|e| AuthGatewayError::Provider(e.to_string()))?;

        let session = self.token(Grant::Password, body).await?;
        tracing::info!(admin_id = %session.admin.id, "Signed in with password");
        Ok(session)
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AuthGatewayError> {
        let body = serde_json::to_value(RefreshGrant { refresh_token })
            .map_err(|e| AuthGatewayError::Provider(e.to_string()))?;

        self.token(Grant::Refresh, body).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthGatewayError> {
        let req = self
            .request(reqwest::Method::POST, "logout")
            .bearer_auth(access_token);

        self.send(req, None).await?;
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<AdminProfile, AuthGatewayError> {
        let req = self
            .request(reqwest::Method::GET, "user")
            .bearer_auth(access_token);

        let user: UserResponse = self
            .send(req, None)
            .await?
            .json()
            .await
            .map_err(|e| AuthGatewayError::Provider(format!("Unexpected user response: {}", e)))?;

        Ok(user.into())
    }

    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), AuthGatewayError> {
        let req = self
            .request(reqwest::Method::PUT, "user")
            .bearer_auth(access_token)
            .json(&PasswordUpdate {
                password: new_password,
            });

        self.send(req, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> ErrorBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn url_is_rooted_at_auth_v1() {
        let client = SupabaseAuthClient::new(
            reqwest::Client::new(),
            "https://abc.supabase.co/",
            "anon".into(),
        );
        assert_eq!(client.url("user"), "https://abc.supabase.co/auth/v1/user");
    }

    #[test]
    fn token_response_becomes_session() {
        let raw = json!({
            "access_token": "at",
            "refresh_token": "rt",
            "expires_in": 3600,
            "expires_at": 1_900_000_000,
            "token_type": "bearer",
            "user": {
                "id": "6f1c1c8e-8a59-4a39-9d1e-2c1f0e8d1a11",
                "email": "owner@example.com",
                "user_metadata": { "full_name": "Site Owner" },
                "last_sign_in_at": "2024-05-01T10:00:00Z"
            }
        });

        let session = serde_json::from_value::<TokenResponse>(raw)
            .unwrap()
            .into_session();

        assert_eq!(session.access_token, "at");
        assert_eq!(session.refresh_token, "rt");
        assert_eq!(session.expires_at.timestamp(), 1_900_000_000);
        assert_eq!(session.admin.email, "owner@example.com");
        assert_eq!(session.admin.name.as_deref(), Some("Site Owner"));
        assert!(session.admin.last_sign_in_at.is_some());
    }

    #[test]
    fn missing_expires_at_is_derived_from_expires_in() {
        let raw = json!({
            "access_token": "at",
            "refresh_token": "rt",
            "expires_in": 60,
            "user": { "id": "6f1c1c8e-8a59-4a39-9d1e-2c1f0e8d1a11" }
        });

        let session = serde_json::from_value::<TokenResponse>(raw)
            .unwrap()
            .into_session();

        assert!(session.expires_at > Utc::now());
        assert!(session.admin.name.is_none());
    }

    #[test]
    fn wrong_password_maps_to_invalid_credentials() {
        let err = map_failure(
            StatusCode::BAD_REQUEST,
            &body(json!({"error": "invalid_grant", "error_description": "Invalid login credentials"})),
            Some(Grant::Password),
        );
        assert_eq!(err, AuthGatewayError::InvalidCredentials);
    }

    #[test]
    fn newer_error_codes_are_recognized() {
        let err = map_failure(
            StatusCode::BAD_REQUEST,
            &body(json!({"code": 400, "error_code": "refresh_token_not_found", "msg": "Invalid Refresh Token"})),
            Some(Grant::Refresh),
        );
        assert_eq!(err, AuthGatewayError::InvalidRefreshToken);
    }

    #[test]
    fn unauthorized_user_call_maps_to_unauthorized() {
        let err = map_failure(StatusCode::UNAUTHORIZED, &ErrorBody::default(), None);
        assert_eq!(err, AuthGatewayError::Unauthorized);
    }

    #[test]
    fn weak_password_is_rejected_with_message() {
        let err = map_failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            &body(json!({"msg": "Password should be at least 6 characters"})),
            None,
        );
        assert_eq!(
            err,
            AuthGatewayError::PasswordRejected("Password should be at least 6 characters".into())
        );
    }

    #[test]
    fn server_error_is_provider_error() {
        let err = map_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            &body(json!({"message": "boom"})),
            Some(Grant::Password),
        );
        assert_eq!(err, AuthGatewayError::Provider("500 boom".into()));
    }
}
