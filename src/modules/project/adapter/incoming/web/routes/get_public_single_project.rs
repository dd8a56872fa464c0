use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::project::application::domain::entities::PublicProjectDetail;
use crate::project::application::ports::incoming::use_cases::GetPublicSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project page: media, buttons and related work
#[utoipa::path(
    get,
    path = "/api/public/projects/{id}",
    tag = "project",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Published project with children and related projects", body = inline(SuccessResponse<PublicProjectDetail>)),
        (status = 404, description = "Missing or unpublished", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/projects/{id}")]
pub async fn get_public_single_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_public_single.execute(project_id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetPublicSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetPublicSingleProjectError::RepositoryError(msg)) => {
            error!(
                "Repository error fetching public project {}: {}",
                project_id, msg
            );
            ApiResponse::internal_error()
        }
    }
}
