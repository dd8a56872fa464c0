use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::shared::content::web::{content_error_response, ContentKind};
use crate::skill::application::domain::entities::{Skill, SkillDraft, SkillForm, SKILL_CATEGORIES};
use crate::AppState;

const KIND: ContentKind = ContentKind::new("SKILL_NOT_FOUND", "Skill");

#[utoipa::path(
    get,
    path = "/api/public/skills",
    tag = "skill",
    responses(
        (status = 200, description = "Published skills by display order", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/skills")]
pub async fn get_public_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.list_published().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/skills",
    tag = "skill",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All skills", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/skills")]
pub async fn get_skills_handler(_admin: AdminSession, data: web::Data<AppState>) -> impl Responder {
    match data.skill.list_all().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

/// Categories offered by the skill form
#[utoipa::path(
    get,
    path = "/api/admin/skills/categories",
    tag = "skill",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fixed category list", body = inline(SuccessResponse<Vec<String>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/skills/categories")]
pub async fn get_skill_categories_handler(_admin: AdminSession) -> impl Responder {
    ApiResponse::success(SKILL_CATEGORIES)
}

#[utoipa::path(
    post,
    path = "/api/admin/skills",
    tag = "skill",
    security(("bearer_auth" = [])),
    request_body = SkillForm,
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    _admin: AdminSession,
    form: web::Json<SkillForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match SkillDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.skill.create(draft).await {
        Ok(row) => ApiResponse::created(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/skills/{id}",
    tag = "skill",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Skill ID")),
    request_body = SkillForm,
    responses(
        (status = 200, description = "Skill updated", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    form: web::Json<SkillForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match SkillDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.skill.update(path.into_inner(), draft).await {
        Ok(row) => ApiResponse::success(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/skills/{id}",
    tag = "skill",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Skill ID")),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 404, description = "Skill not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response(e, KIND),
    }
}
