use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::message::application::domain::entities::{
    Message, MessageDraft, MessageForm, MessageSearch,
};
use crate::message::application::ports::MessageError;
use crate::shared::api::{ApiResponse, ListQuery};
use crate::shared::pagination::PageResult;
use crate::AppState;

fn message_error_response(err: MessageError) -> HttpResponse {
    match err {
        MessageError::NotFound => ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found"),
        MessageError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Message repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// Contact form submission
#[utoipa::path(
    post,
    path = "/api/public/messages",
    tag = "message",
    request_body = MessageForm,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<Message>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/public/messages")]
pub async fn submit_message_handler(
    form: web::Json<MessageForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match MessageDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.message.submit(draft).await {
        Ok(message) => ApiResponse::created(message),
        Err(e) => message_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "message",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "One page of the inbox, newest first", body = inline(SuccessResponse<PageResult<Message>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/messages")]
pub async fn get_messages_handler(
    _admin: AdminSession,
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (search, page) = query.into_inner().into();

    match data.message.list(MessageSearch::new(search), page).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => message_error_response(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/admin/messages/{id}/read",
    tag = "message",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message marked as read", body = inline(SuccessResponse<Message>)),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/messages/{id}/read")]
pub async fn mark_message_read_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.message.mark_read(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(e) => message_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    tag = "message",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message ID")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/messages/{id}")]
pub async fn delete_message_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.message.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => message_error_response(e),
    }
}
