use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::fetch_admin_profile::FetchAdminProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::session_dto::AdminProfileResponse;

/// Current admin
///
/// Returns the signed-in admin as known to the auth service.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin profile", body = inline(SuccessResponse<AdminProfileResponse>)),
        (status = 401, description = "Session no longer valid", body = ErrorResponse),
        (status = 502, description = "Auth service failure", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_admin_profile_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.profile.execute(&session.access_token).await {
        Ok(profile) => ApiResponse::success(AdminProfileResponse::from(profile)),

        Err(FetchAdminProfileError::SessionExpired) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(FetchAdminProfileError::ProviderError(ref e)) => {
            error!(admin_id = %session.admin_id, error = %e, "Failed to fetch admin profile");
            ApiResponse::bad_gateway("AUTH_PROVIDER_ERROR", "Authentication service unavailable")
        }
    }
}
