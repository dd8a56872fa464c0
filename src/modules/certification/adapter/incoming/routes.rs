use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::certification::application::domain::entities::{
    Certification, CertificationDraft, CertificationForm,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::web::{content_error_response, ContentKind};
use crate::AppState;

const KIND: ContentKind = ContentKind::new("CERTIFICATION_NOT_FOUND", "Certification");

#[utoipa::path(
    get,
    path = "/api/public/certifications",
    tag = "certification",
    responses(
        (status = 200, description = "Published certifications", body = inline(SuccessResponse<Vec<Certification>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/certifications")]
pub async fn get_public_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certification.list_published().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/certifications",
    tag = "certification",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All certifications", body = inline(SuccessResponse<Vec<Certification>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/certifications")]
pub async fn get_certifications_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.list_all().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/certifications",
    tag = "certification",
    security(("bearer_auth" = [])),
    request_body = CertificationForm,
    responses(
        (status = 201, description = "Certification created", body = inline(SuccessResponse<Certification>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/admin/certifications")]
pub async fn create_certification_handler(
    _admin: AdminSession,
    form: web::Json<CertificationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match CertificationDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.certification.create(draft).await {
        Ok(row) => ApiResponse::created(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/certifications/{id}",
    tag = "certification",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Certification ID")),
    request_body = CertificationForm,
    responses(
        (status = 200, description = "Certification updated", body = inline(SuccessResponse<Certification>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Certification not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/certifications/{id}")]
pub async fn update_certification_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    form: web::Json<CertificationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match CertificationDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.certification.update(path.into_inner(), draft).await {
        Ok(row) => ApiResponse::success(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/certifications/{id}",
    tag = "certification",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Certification ID")),
    responses(
        (status = 204, description = "Certification deleted"),
        (status = 404, description = "Certification not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/certifications/{id}")]
pub async fn delete_certification_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response(e, KIND),
    }
}
