use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::experience::application::domain::entities::{
    Experience, ExperienceDraft, ExperienceForm,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::web::{content_error_response, ContentKind};
use crate::AppState;

const KIND: ContentKind = ContentKind::new("EXPERIENCE_NOT_FOUND", "Experience");

/// Published work history
#[utoipa::path(
    get,
    path = "/api/public/experiences",
    tag = "experience",
    responses(
        (status = 200, description = "Published experiences by display order", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/experiences")]
pub async fn get_public_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list_published().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/experiences",
    tag = "experience",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All experiences", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/experiences")]
pub async fn get_experiences_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.list_all().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/experiences",
    tag = "experience",
    security(("bearer_auth" = [])),
    request_body = ExperienceForm,
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    _admin: AdminSession,
    form: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match ExperienceDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.experience.create(draft).await {
        Ok(row) => ApiResponse::created(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/experiences/{id}",
    tag = "experience",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Experience ID")),
    request_body = ExperienceForm,
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    form: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match ExperienceDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.experience.update(path.into_inner(), draft).await {
        Ok(row) => ApiResponse::success(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/experiences/{id}",
    tag = "experience",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Experience ID")),
    responses(
        (status = 204, description = "Experience deleted"),
        (status = 404, description = "Experience not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response(e, KIND),
    }
}
