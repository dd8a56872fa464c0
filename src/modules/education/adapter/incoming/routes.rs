use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::education::application::domain::entities::{Education, EducationDraft, EducationForm};
use crate::shared::api::ApiResponse;
use crate::shared::content::web::{content_error_response, ContentKind};
use crate::AppState;

const KIND: ContentKind = ContentKind::new("EDUCATION_NOT_FOUND", "Education");

#[utoipa::path(
    get,
    path = "/api/public/education",
    tag = "education",
    responses(
        (status = 200, description = "Published education entries", body = inline(SuccessResponse<Vec<Education>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/education")]
pub async fn get_public_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.list_published().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/education",
    tag = "education",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All education entries", body = inline(SuccessResponse<Vec<Education>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/education")]
pub async fn get_education_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.list_all().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/education",
    tag = "education",
    security(("bearer_auth" = [])),
    request_body = EducationForm,
    responses(
        (status = 201, description = "Education entry created", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/admin/education")]
pub async fn create_education_handler(
    _admin: AdminSession,
    form: web::Json<EducationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match EducationDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.education.create(draft).await {
        Ok(row) => ApiResponse::created(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/education/{id}",
    tag = "education",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Education entry ID")),
    request_body = EducationForm,
    responses(
        (status = 200, description = "Education entry updated", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Education entry not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/education/{id}")]
pub async fn update_education_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    form: web::Json<EducationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match EducationDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.education.update(path.into_inner(), draft).await {
        Ok(row) => ApiResponse::success(row),
        Err(e) => content_error_response(e, KIND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/education/{id}",
    tag = "education",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Education entry ID")),
    responses(
        (status = 204, description = "Education entry deleted"),
        (status = 404, description = "Education entry not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => content_error_response(e, KIND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content::ContentError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_auth_header, test_session_guard};
    use crate::tests::support::stubs::StubContentUseCase;
    use actix_web::{test, App};
    use chrono::{NaiveDate, Utc};

    fn education() -> Education {
        Education {
            id: Uuid::new_v4(),
            degree: "BSc Computer Science".into(),
            institution: "Uni".into(),
            start_date: NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 6, 30),
            is_current: false,
            grade: None,
            certificate_url: None,
            logo_url: None,
            display_order: 0,
            is_published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_public_list() {
        let app_state = TestAppStateBuilder::default()
            .with_education(StubContentUseCase::with_rows(vec![education()]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_education_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/education")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["degree"], "BSc Computer Science");
        assert_eq!(body["data"][0]["end_date"], "2020-06-30");
    }

    #[actix_web::test]
    async fn test_create_missing_degree() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_session_guard()))
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/education")
            .insert_header(admin_auth_header())
            .set_json(serde_json::json!({
                "institution": "Uni",
                "start_date": "2016-09-01",
                "display_order": 0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Degree is required");
    }

    #[actix_web::test]
    async fn test_delete_unknown_id() {
        let app_state = TestAppStateBuilder::default()
            .with_education(StubContentUseCase::<Education>::failing(ContentError::NotFound))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_session_guard()))
                .service(delete_education_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/education/{}", Uuid::new_v4()))
            .insert_header(admin_auth_header())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EDUCATION_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_database_failure_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_education(StubContentUseCase::<Education>::failing(
                ContentError::RepositoryError("connection reset".into()),
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_session_guard()))
                .service(get_education_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/education")
            .insert_header(admin_auth_header())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
