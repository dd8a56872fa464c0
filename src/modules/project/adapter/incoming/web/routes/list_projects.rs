use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::project::application::domain::entities::{Project, ProjectListFilter};
use crate::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::shared::content::Visibility;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectListQuery {
    /// Only featured (`true`) or only non-featured (`false`) projects
    pub featured: Option<bool>,
    /// Exact category; `all` disables the filter
    pub category: Option<String>,
    /// Case-insensitive match on title and short description
    pub search: Option<String>,
}

impl From<ProjectListQuery> for ProjectListFilter {
    fn from(q: ProjectListQuery) -> Self {
        ProjectListFilter::new(q.featured, q.category, q.search)
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "project",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Published projects by display order", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/projects")]
pub async fn get_public_projects_handler(
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(data, query.into_inner().into(), Visibility::Published).await
}

#[utoipa::path(
    get,
    path = "/api/admin/projects",
    tag = "project",
    security(("bearer_auth" = [])),
    params(ProjectListQuery),
    responses(
        (status = 200, description = "All projects, drafts included", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/projects")]
pub async fn get_projects_handler(
    _admin: AdminSession,
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(data, query.into_inner().into(), Visibility::All).await
}

async fn list(
    data: web::Data<AppState>,
    filter: ProjectListFilter,
    visibility: Visibility,
) -> HttpResponse {
    match data.project.get_list.execute(filter, visibility).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
