use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::application::{
    domain::entities::AdminSession,
    services::{SessionGuard, SessionGuardError},
};
use crate::shared::api::ApiResponse;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Guard for every `/api/admin/*` route and the session-bound auth routes.
impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let guard = req.app_data::<web::Data<SessionGuard>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let Some(guard) = guard else {
                tracing::error!("SessionGuard is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )));
            };

            guard.authorize(&token).await.map_err(|e| {
                let response = match e {
                    SessionGuardError::InvalidToken => {
                        ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
                    }
                    SessionGuardError::Revoked => {
                        ApiResponse::unauthorized("SESSION_REVOKED", "Session has been logged out")
                    }
                    SessionGuardError::NotAnAdmin => {
                        ApiResponse::forbidden("NOT_AN_ADMIN", "Administrator access required")
                    }
                    SessionGuardError::BlacklistUnavailable(ref msg) => {
                        tracing::error!(error = %msg, "Session blacklist lookup failed");
                        ApiResponse::internal_error()
                    }
                };
                create_api_error(response)
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{test_session_guard, TEST_ADMIN_TOKEN};
    use actix_web::{get, test, App, HttpResponse, Responder};

    #[get("/guarded")]
    async fn guarded(session: AdminSession) -> impl Responder {
        HttpResponse::Ok().body(session.email)
    }

    async fn call(guard: Option<SessionGuard>, auth: Option<&str>) -> (u16, serde_json::Value) {
        let mut app = App::new().service(guarded);
        if let Some(guard) = guard {
            app = app.app_data(web::Data::new(guard));
        }
        let app = test::init_service(app).await;

        let mut req = test::TestRequest::get().uri("/guarded");
        if let Some(value) = auth {
            req = req.insert_header(("Authorization", value));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[actix_web::test]
    async fn valid_token_passes() {
        let (status, _) = call(
            Some(test_session_guard()),
            Some(&format!("Bearer {}", TEST_ADMIN_TOKEN)),
        )
        .await;
        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn missing_header_is_401() {
        let (status, json) = call(Some(test_session_guard()), None).await;
        assert_eq!(status, 401);
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_401() {
        let (status, json) = call(Some(test_session_guard()), Some("Basic abc")).await;
        assert_eq!(status, 401);
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn unknown_token_is_invalid() {
        let (status, json) = call(Some(test_session_guard()), Some("Bearer garbage")).await;
        assert_eq!(status, 401);
        assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn revoked_token_is_rejected() {
        use crate::tests::support::auth_helper::REVOKED_ADMIN_TOKEN;

        let (status, json) = call(
            Some(test_session_guard()),
            Some(&format!("Bearer {}", REVOKED_ADMIN_TOKEN)),
        )
        .await;
        assert_eq!(status, 401);
        assert_eq!(json["error"]["code"], "SESSION_REVOKED");
    }

    #[actix_web::test]
    async fn non_admin_token_is_forbidden() {
        use crate::tests::support::auth_helper::VISITOR_TOKEN;

        let (status, json) = call(
            Some(test_session_guard()),
            Some(&format!("Bearer {}", VISITOR_TOKEN)),
        )
        .await;
        assert_eq!(status, 403);
        assert_eq!(json["error"]["code"], "NOT_AN_ADMIN");
    }

    #[actix_web::test]
    async fn missing_guard_is_internal_error() {
        let (status, _) = call(None, Some("Bearer anything")).await;
        assert_eq!(status, 500);
    }
}
