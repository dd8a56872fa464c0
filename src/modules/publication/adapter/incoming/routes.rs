use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::publication::application::domain::entities::{
    Publication, PublicationDraft, PublicationForm,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::web::{content_error_response, ContentKind};
use crate::AppState;

const KIND: ContentKind = ContentKind::new("PUBLICATION_NOT_FOUND", "Publication");

#[utoipa::path(
    get,
    path = "/api/public/publications",
    tag = "publication",
    responses(
        (status = 200, description = "Published papers and articles", body = inline(SuccessResponse<Vec<Publication>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/publications")]
pub async fn get_public_publications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.publication.list_published().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/publications",
    tag = "publication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All publications", body = inline(SuccessResponse<Vec<Publication>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/publications")]
pub async fn get_publications_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.publication.list_all().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/publications",
    tag = "publication",
    security(("bearer_auth" = [])),
    request_body = PublicationForm,
    responses(
        (status = 201, description = "Publication created", body = inline(SuccessResponse<Publication>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/admin/publications")]
pub async fn create_publication_handler(
    _admin: AdminSession,
    form: web::Json<PublicationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match PublicationDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.publication.create(draft).await {
        Ok(row) => ApiResponse::created(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/publications/{id}",
    tag = "publication",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Publication ID")),
    request_body = PublicationForm,
    responses(
        (status = 200, description = "Publication updated", body = inline(SuccessResponse<Publication>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Publication not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/publications/{id}")]
pub async fn update_publication_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    form: web::Json<PublicationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match PublicationDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.publication.update(path.into_inner(), draft).await {
        Ok(row) => ApiResponse::success(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/publications/{id}",
    tag = "publication",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Publication ID")),
    responses(
        (status = 204, description = "Publication deleted"),
        (status = 404, description = "Publication not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/publications/{id}")]
pub async fn delete_publication_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.publication.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response(e, KIND),
    }
}
