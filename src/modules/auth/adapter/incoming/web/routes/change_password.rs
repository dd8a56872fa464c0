use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    #[serde(default)]
    pub new_password: String,

    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChangePasswordResponse {
    #[schema(example = "Password updated successfully")]
    message: String,
}

/// Change admin password
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = inline(SuccessResponse<ChangePasswordResponse>)),
        (
            status = 400,
            description = "Passwords do not match or are too short",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "New passwords do not match" }
            })
        ),
        (status = 401, description = "Session no longer valid", body = ErrorResponse),
        (status = 502, description = "Auth service failure", body = ErrorResponse),
    )
)]
#[put("/api/auth/password")]
pub async fn change_password_handler(
    session: AdminSession,
    req: web::Json<ChangePasswordDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ChangePasswordCommand::new(dto.new_password, dto.confirm_password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data
        .auth
        .change_password
        .execute(&session.access_token, command)
        .await
    {
        Ok(()) => {
            info!(admin_id = %session.admin_id, "Admin password changed");
            ApiResponse::success(ChangePasswordResponse {
                message: "Password updated successfully".to_string(),
            })
        }

        Err(ChangePasswordError::Rejected(ref msg)) => {
            warn!(admin_id = %session.admin_id, "Password change rejected by auth service");
            ApiResponse::validation_error(msg)
        }

        Err(ChangePasswordError::SessionExpired) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(ChangePasswordError::ProviderError(ref e)) => {
            error!(error = %e, "Auth provider failed during password change");
            ApiResponse::bad_gateway("AUTH_PROVIDER_ERROR", "Authentication service unavailable")
        }
    }
}
