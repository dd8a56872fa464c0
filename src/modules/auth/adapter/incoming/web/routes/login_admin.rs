use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::session_dto::SessionResponse;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Admin login
///
/// Signs the site owner in with email and password at the hosted auth service.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<SessionResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 403, description = "Account is not an administrator", body = ErrorResponse),
        (status = 502, description = "Auth service failure", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.auth.login.execute(command).await {
        Ok(session) => {
            info!(admin_id = %session.admin.id, "Admin logged in");
            ApiResponse::success(SessionResponse::from(session))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::NotAnAdmin) => {
            warn!("Login failed: Account is not on the admin list");
            ApiResponse::forbidden("NOT_AN_ADMIN", "Administrator access required")
        }

        Err(LoginError::ProviderError(ref e)) => {
            error!(error = %e, "Auth provider failed during login");
            ApiResponse::bad_gateway("AUTH_PROVIDER_ERROR", "Authentication service unavailable")
        }
    }
}
