use actix_web::{
    delete, get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse, Responder,
};
use chrono::Utc;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::{ApiResponse, ListQuery};
use crate::shared::pagination::PageResult;
use crate::subscriber::application::domain::csv_export::export_filename;
use crate::subscriber::application::domain::entities::{
    SubscribeForm, Subscriber, SubscriberDraft,
};
use crate::subscriber::application::ports::SubscriberError;
use crate::AppState;

fn subscriber_error_response(err: SubscriberError) -> HttpResponse {
    match err {
        SubscriberError::AlreadySubscribed => ApiResponse::conflict(
            "ALREADY_SUBSCRIBED",
            "This email is already subscribed",
        ),
        SubscriberError::NotFound => {
            ApiResponse::not_found("SUBSCRIBER_NOT_FOUND", "Subscriber not found")
        }
        SubscriberError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Subscriber repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// Newsletter signup from the site footer
#[utoipa::path(
    post,
    path = "/api/public/subscribers",
    tag = "subscriber",
    request_body = SubscribeForm,
    responses(
        (status = 201, description = "Subscribed", body = inline(SuccessResponse<Subscriber>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Already subscribed", body = ErrorResponse),
    )
)]
#[post("/api/public/subscribers")]
pub async fn subscribe_handler(
    form: web::Json<SubscribeForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match SubscriberDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.subscriber.subscribe(draft).await {
        Ok(subscriber) => ApiResponse::created(subscriber),
        Err(e) => subscriber_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/subscribers",
    tag = "subscriber",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "One page of subscribers, newest first", body = inline(SuccessResponse<PageResult<Subscriber>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/subscribers")]
pub async fn get_subscribers_handler(
    _admin: AdminSession,
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (search, page) = query.into_inner().into();

    match data.subscriber.list(search, page).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => subscriber_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/subscribers/export",
    tag = "subscriber",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/subscribers/export")]
pub async fn export_subscribers_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.subscriber.export_csv().await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(export_filename(
                    Utc::now().date_naive(),
                ))],
            })
            .body(csv),
        Err(e) => subscriber_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/subscribers/{id}",
    tag = "subscriber",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Subscriber ID")),
    responses(
        (status = 204, description = "Subscriber removed"),
        (status = 404, description = "Subscriber not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/subscribers/{id}")]
pub async fn delete_subscriber_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.subscriber.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => subscriber_error_response(e),
    }
}
