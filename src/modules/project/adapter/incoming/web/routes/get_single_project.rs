use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::project::application::domain::entities::ProjectDetail;
use crate::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/projects/{id}",
    tag = "project",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project with children, published or not", body = inline(SuccessResponse<ProjectDetail>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/api/admin/projects/{id}")]
pub async fn get_single_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(project_id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::RepositoryError(msg)) => {
            error!("Repository error fetching project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
