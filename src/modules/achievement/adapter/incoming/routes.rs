use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::achievement::application::domain::entities::{
    Achievement, AchievementDraft, AchievementForm,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::shared::content::web::{content_error_response, ContentKind};
use crate::AppState;

const KIND: ContentKind = ContentKind::new("ACHIEVEMENT_NOT_FOUND", "Achievement");

#[utoipa::path(
    get,
    path = "/api/public/achievements",
    tag = "achievement",
    responses(
        (status = 200, description = "Published achievements", body = inline(SuccessResponse<Vec<Achievement>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/achievements")]
pub async fn get_public_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    match data.achievement.list_published().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/achievements",
    tag = "achievement",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All achievements", body = inline(SuccessResponse<Vec<Achievement>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/achievements")]
pub async fn get_achievements_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.achievement.list_all().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/achievements",
    tag = "achievement",
    security(("bearer_auth" = [])),
    request_body = AchievementForm,
    responses(
        (status = 201, description = "Achievement created", body = inline(SuccessResponse<Achievement>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/admin/achievements")]
pub async fn create_achievement_handler(
    _admin: AdminSession,
    form: web::Json<AchievementForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match AchievementDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.achievement.create(draft).await {
        Ok(row) => ApiResponse::created(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/achievements/{id}",
    tag = "achievement",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Achievement ID")),
    request_body = AchievementForm,
    responses(
        (status = 200, description = "Achievement updated", body = inline(SuccessResponse<Achievement>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Achievement not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/achievements/{id}")]
pub async fn update_achievement_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    form: web::Json<AchievementForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match AchievementDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.achievement.update(path.into_inner(), draft).await {
        Ok(row) => ApiResponse::success(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/achievements/{id}",
    tag = "achievement",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Achievement ID")),
    responses(
        (status = 204, description = "Achievement deleted"),
        (status = 404, description = "Achievement not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/achievements/{id}")]
pub async fn delete_achievement_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.achievement.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response(e, KIND),
    }
}
