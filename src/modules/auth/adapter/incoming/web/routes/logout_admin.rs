use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::logout_admin::{LogoutError, LogoutResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

/// Admin logout
///
/// Revokes the presented access token and ends the session at the auth service.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponse>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 500, description = "Token could not be revoked", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(session).await {
        Ok(response) => ApiResponse::success(response),

        // Unlike a client-side logout, the token would stay usable here.
        Err(LogoutError::TokenRevocationFailed(ref e)) => {
            error!(error = %e, "Token revocation failed during logout");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::logout_admin::ILogoutAdminUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_auth_header, test_session_guard};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLogout(Result<LogoutResponse, LogoutError>);

    #[async_trait]
    impl ILogoutAdminUseCase for MockLogout {
        async fn execute(&self, session: AdminSession) -> Result<LogoutResponse, LogoutError> {
            assert_eq!(session.email, "owner@example.com");
            self.0.clone()
        }
    }

    async fn post_logout(
        result: Result<LogoutResponse, LogoutError>,
        authorized: bool,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_logout_admin(MockLogout(result))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_session_guard()))
                .service(logout_admin_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/auth/logout");
        if authorized {
            req = req.insert_header(admin_auth_header());
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_logout_success() {
        let (status, body) = post_logout(
            Ok(LogoutResponse {
                message: "Logged out successfully".into(),
            }),
            true,
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["message"], "Logged out successfully");
    }

    #[actix_web::test]
    async fn test_logout_requires_token() {
        let (status, body) = post_logout(
            Ok(LogoutResponse {
                message: "Logged out successfully".into(),
            }),
            false,
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_logout_revocation_failure_is_internal_error() {
        let (status, body) = post_logout(
            Err(LogoutError::TokenRevocationFailed("redis down".into())),
            true,
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
