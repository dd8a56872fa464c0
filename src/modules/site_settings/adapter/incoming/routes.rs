use actix_web::{get, put, web, HttpResponse, Responder};
use std::collections::HashMap;

use crate::api::schemas::{ErrorResponse, SettingsDocument, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::site_settings::application::domain::entities::SettingsUpdate;
use crate::site_settings::application::ports::SettingsError;
use crate::AppState;

fn settings_error_response(err: SettingsError) -> HttpResponse {
    match err {
        SettingsError::NotFound => ApiResponse::not_found("SETTING_NOT_FOUND", "Setting not found"),
        SettingsError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Site settings repository failure");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/public/settings",
    tag = "site_settings",
    responses(
        (status = 200, description = "All settings keyed by name", body = inline(SuccessResponse<SettingsDocument>)),
    )
)]
#[get("/api/public/settings")]
pub async fn get_public_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.site_settings.all().await {
        Ok(map) => ApiResponse::success(map),
        Err(e) => settings_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/public/settings/{key}",
    tag = "site_settings",
    params(("key" = String, Path, description = "Setting name, e.g. site_name")),
    responses(
        (status = 200, description = "Setting value; null when the row has no value", body = inline(SuccessResponse<String>)),
        (status = 404, description = "Setting not found", body = ErrorResponse),
    )
)]
#[get("/api/public/settings/{key}")]
pub async fn get_public_setting_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.site_settings.get(&path.into_inner()).await {
        Ok(setting) => ApiResponse::success(setting.setting_value),
        Err(e) => settings_error_response(e),
    }
}

/// Saves the admin settings screen.
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = "site_settings",
    security(("bearer_auth" = [])),
    request_body = SettingsDocument,
    responses(
        (status = 200, description = "Settings after the update", body = inline(SuccessResponse<SettingsDocument>)),
        (status = 400, description = "Unknown setting", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[put("/api/admin/settings")]
pub async fn update_settings_handler(
    _admin: AdminSession,
    form: web::Json<HashMap<String, Option<String>>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let update = match SettingsUpdate::try_from(form.into_inner()) {
        Ok(u) => u,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.site_settings.update(update).await {
        Ok(map) => ApiResponse::success(map),
        Err(e) => settings_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_auth_header, test_session_guard};
    use crate::tests::support::stubs::StubSettingsUseCase;

    #[actix_web::test]
    async fn test_public_settings_map() {
        let state = TestAppStateBuilder::default()
            .with_site_settings(StubSettingsUseCase::with_values(&[
                ("site_name", Some("Jane Doe")),
                ("github_url", None),
            ]))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_public_settings_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/public/settings").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["site_name"], "Jane Doe");
        assert!(body["data"]["github_url"].is_null());
    }

    #[actix_web::test]
    async fn test_single_setting_returns_value() {
        let state = TestAppStateBuilder::default()
            .with_site_settings(StubSettingsUseCase::with_values(&[
                ("site_name", Some("Jane Doe")),
                ("github_url", None),
            ]))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_public_setting_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/public/settings/site_name")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], "Jane Doe");

        let req = test::TestRequest::get()
            .uri("/api/public/settings/github_url")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn test_missing_setting_is_404() {
        let state = TestAppStateBuilder::default()
            .with_site_settings(StubSettingsUseCase::with_values(&[]))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_public_setting_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/public/settings/site_tagline")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SETTING_NOT_FOUND");
    }

    async fn put_settings(payload: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_site_settings(StubSettingsUseCase::with_values(&[]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_session_guard()))
                .service(update_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/settings")
            .insert_header(admin_auth_header())
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_update_returns_saved_map() {
        let (status, body) = put_settings(json!({
            "site_name": "Jane Doe",
            "site_tagline": ""
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["site_name"], "Jane Doe");
        assert!(body["data"]["site_tagline"].is_null());
    }

    #[actix_web::test]
    async fn test_unknown_key_is_400() {
        let (status, body) = put_settings(json!({ "theme": "dark" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Unknown setting: theme");
    }
}
