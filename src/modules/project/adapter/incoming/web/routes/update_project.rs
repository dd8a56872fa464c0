use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::project::application::domain::entities::{ProjectDetail, ProjectDraft, ProjectForm};
use crate::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full replace: every field is written and each child list replaces the stored one
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    tag = "project",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<ProjectDetail>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    form: web::Json<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    let draft = match ProjectDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.update.execute(project_id, draft).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
