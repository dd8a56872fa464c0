use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::dashboard::application::domain::entities::DashboardStats;
use crate::dashboard::application::ports::DashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Totals and latest messages", body = inline(SuccessResponse<DashboardStats>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.stats().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(DashboardError::QueryError(msg)) => {
            tracing::error!(error = %msg, "Dashboard query failure");
            ApiResponse::internal_error()
        }
    }
}
