use actix_web::{delete, get, post, web, HttpMessage, HttpRequest, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::resume::application::domain::entities::{
    Resume, ResumeFile, ResumeFileError, ResumeUploadQuery,
};
use crate::resume::application::ports::ResumeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn resume_error_response(err: ResumeError) -> HttpResponse {
    match err {
        ResumeError::InvalidFile(ResumeFileError::TooLarge) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &ResumeFileError::TooLarge.to_string())
        }
        ResumeError::InvalidFile(e) => ApiResponse::validation_error(&e.to_string()),
        ResumeError::NotFound => ApiResponse::not_found("RESUME_NOT_FOUND", "No resume uploaded"),
        ResumeError::Storage(msg) => {
            tracing::error!(error = %msg, "Resume storage failure");
            ApiResponse::bad_gateway("STORAGE_ERROR", "File storage request failed")
        }
        ResumeError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Resume repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// Resume download link for the site header
#[utoipa::path(
    get,
    path = "/api/public/resume",
    tag = "resume",
    responses(
        (status = 200, description = "Current resume", body = inline(SuccessResponse<Resume>)),
        (status = 404, description = "No resume uploaded", body = ErrorResponse),
    )
)]
#[get("/api/public/resume")]
pub async fn get_public_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.current().await {
        Ok(Some(resume)) => ApiResponse::success(resume),
        Ok(None) => resume_error_response(ResumeError::NotFound),
        Err(e) => resume_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/resume",
    tag = "resume",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current resume or null", body = inline(SuccessResponse<Resume>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/resume")]
pub async fn get_resume_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.current().await {
        Ok(resume) => ApiResponse::success(resume),
        Err(e) => resume_error_response(e),
    }
}

/// Replaces the current resume with the PDF sent as the raw request body.
#[utoipa::path(
    post,
    path = "/api/admin/resume",
    tag = "resume",
    security(("bearer_auth" = [])),
    params(ResumeUploadQuery),
    request_body(content = Vec<u8>, content_type = "application/pdf"),
    responses(
        (status = 201, description = "Resume uploaded", body = inline(SuccessResponse<Resume>)),
        (status = 400, description = "Not a PDF", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/admin/resume")]
pub async fn upload_resume_handler(
    _admin: AdminSession,
    req: HttpRequest,
    query: web::Query<ResumeUploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let file = match ResumeFile::parse(
        req.content_type(),
        query.into_inner().filename,
        body.to_vec(),
    ) {
        Ok(f) => f,
        Err(e) => return resume_error_response(e.into()),
    };

    match data.resume.replace(file).await {
        Ok(resume) => ApiResponse::created(resume),
        Err(e) => resume_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/resume",
    tag = "resume",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Resume removed"),
        (status = 404, description = "No resume uploaded", body = ErrorResponse),
    )
)]
#[delete("/api/admin/resume")]
pub async fn delete_resume_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.remove().await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => resume_error_response(e),
    }
}
