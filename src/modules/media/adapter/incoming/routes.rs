use actix_web::{delete, post, web, HttpMessage, HttpRequest, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::media::application::domain::entities::{
    ImageUploadQuery, MediaPolicyError, UploadedImage,
};
use crate::media::application::ports::MediaError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn media_error_response(err: MediaError) -> HttpResponse {
    match err {
        MediaError::InvalidFile(MediaPolicyError::TooLarge) => ApiResponse::payload_too_large(
            "FILE_TOO_LARGE",
            &MediaPolicyError::TooLarge.to_string(),
        ),
        MediaError::InvalidFile(e) => ApiResponse::validation_error(&e.to_string()),
        MediaError::NotFound => ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found"),
        MediaError::Storage(msg) => {
            tracing::error!(error = %msg, "Image storage failure");
            ApiResponse::bad_gateway("STORAGE_ERROR", "File storage request failed")
        }
    }
}

/// Uploads a logo, hero or certificate image sent as the raw request body.
#[utoipa::path(
    post,
    path = "/api/admin/media/images",
    tag = "media",
    security(("bearer_auth" = [])),
    params(ImageUploadQuery),
    request_body(content = Vec<u8>, content_type = "image/*"),
    responses(
        (status = 201, description = "Image stored", body = inline(SuccessResponse<UploadedImage>)),
        (status = 400, description = "Unsupported image", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/admin/media/images")]
pub async fn upload_image_handler(
    _admin: AdminSession,
    req: HttpRequest,
    query: web::Query<ImageUploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let filename = query.into_inner().filename.unwrap_or_default();

    match data
        .media
        .upload_image(req.content_type(), &filename, body.to_vec())
        .await
    {
        Ok(image) => ApiResponse::created(image),
        Err(e) => media_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/media/images/{path}",
    tag = "media",
    security(("bearer_auth" = [])),
    params(("path" = String, Path, description = "Object name returned by the upload")),
    responses(
        (status = 204, description = "Image removed"),
        (status = 400, description = "Invalid path", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/media/images/{path}")]
pub async fn delete_image_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.media.delete_image(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => media_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_auth_header, test_session_guard};
    use crate::tests::support::stubs::StubMediaUseCase;

    async fn upload(stub: StubMediaUseCase, with_auth: bool) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default().with_media(stub).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_session_guard()))
                .service(upload_image_handler),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri("/api/admin/media/images?filename=logo.png")
            .insert_header(("content-type", "image/png"))
            .set_payload(vec![1u8, 2, 3]);
        if with_auth {
            req = req.insert_header(admin_auth_header());
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_upload_returns_path_and_url() {
        let (status, body) = upload(StubMediaUseCase::default(), true).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["path"], "stub.png");
        assert!(body["data"]["public_url"]
            .as_str()
            .unwrap()
            .ends_with("/stub.png"));
    }

    #[actix_web::test]
    async fn test_upload_requires_admin() {
        let (status, _) = upload(StubMediaUseCase::default(), false).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_502() {
        let (status, body) = upload(
            StubMediaUseCase::failing(MediaError::Storage("bucket missing".into())),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    }

    #[actix_web::test]
    async fn test_delete_image_no_content() {
        let state = TestAppStateBuilder::default()
            .with_media(StubMediaUseCase::default())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_session_guard()))
                .service(delete_image_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/admin/media/images/stub.png")
            .insert_header(admin_auth_header())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
