use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_session::{
    RefreshSessionError, RefreshSessionRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{debug, error, warn};
use utoipa::ToSchema;

use super::session_dto::SessionResponse;

#[derive(Deserialize, ToSchema)]
pub struct RefreshSessionDto {
    #[serde(default)]
    #[schema(example = "v1.MRjRZbWx3aWtlS2V5...")]
    pub refresh_token: String,
}

/// Refresh admin session
///
/// Exchanges a refresh token for a new access/refresh token pair.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshSessionDto,
    responses(
        (status = 200, description = "Session refreshed", body = inline(SuccessResponse<SessionResponse>)),
        (status = 400, description = "Refresh token missing", body = ErrorResponse),
        (status = 401, description = "Refresh token invalid or already used", body = ErrorResponse),
        (status = 502, description = "Auth service failure", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_session_handler(
    req: web::Json<RefreshSessionDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshSessionRequest::new(req.into_inner().refresh_token) {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.auth.refresh.execute(request).await {
        Ok(session) => {
            debug!(admin_id = %session.admin.id, "Session refreshed");
            ApiResponse::success(SessionResponse::from(session))
        }

        Err(RefreshSessionError::InvalidRefreshToken) => {
            warn!("Refresh rejected: invalid refresh token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(RefreshSessionError::MissingRefreshToken) => {
            ApiResponse::validation_error("Refresh token is required")
        }

        Err(RefreshSessionError::ProviderError(ref e)) => {
            error!(error = %e, "Auth provider failed during refresh");
            ApiResponse::bad_gateway("AUTH_PROVIDER_ERROR", "Authentication service unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AuthSession;
    use crate::auth::application::use_cases::refresh_session::IRefreshSessionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    use super::super::session_dto::sample_session;

    struct MockRefresh(Result<AuthSession, RefreshSessionError>);

    #[async_trait]
    impl IRefreshSessionUseCase for MockRefresh {
        async fn execute(
            &self,
            _request: RefreshSessionRequest,
        ) -> Result<AuthSession, RefreshSessionError> {
            self.0.clone()
        }
    }

    async fn post_refresh(
        result: Result<AuthSession, RefreshSessionError>,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_session(MockRefresh(result))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(refresh_session_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_refresh_success() {
        let (status, body) = post_refresh(
            Ok(sample_session()),
            serde_json::json!({ "refresh_token": "refresh-token" }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["access_token"], "access-token");
    }

    #[actix_web::test]
    async fn test_refresh_missing_token_is_validation_error() {
        let (status, body) = post_refresh(Ok(sample_session()), serde_json::json!({})).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_refresh_invalid_token() {
        let (status, body) = post_refresh(
            Err(RefreshSessionError::InvalidRefreshToken),
            serde_json::json!({ "refresh_token": "used" }),
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_REFRESH_TOKEN");
    }
}
