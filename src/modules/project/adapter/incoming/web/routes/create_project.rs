use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::project::application::domain::entities::{ProjectDetail, ProjectDraft, ProjectForm};
use crate::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "project",
    security(("bearer_auth" = [])),
    request_body = ProjectForm,
    responses(
        (status = 201, description = "Project and its media created", body = inline(SuccessResponse<ProjectDetail>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminSession,
    form: web::Json<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match ProjectDraft::try_from(form.into_inner()) {
        Ok(d) => d,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.create.execute(draft).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::project::application::ports::incoming::use_cases::CreateProjectUseCase;
    use crate::project::application::project_use_cases::ProjectUseCases;
    use crate::tests::support::app_state_builder::{default_project_use_cases, TestAppStateBuilder};
    use crate::tests::support::auth_helper::{admin_auth_header, test_session_guard};
    use crate::tests::support::project_test_fixtures::sample_detail;

    /* --------------------------------------------------
     * Mock Create Project Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockCreateProjectUseCase {
        result: Result<ProjectDetail, CreateProjectError>,
        received: Arc<Mutex<Option<ProjectDraft>>>,
    }

    impl MockCreateProjectUseCase {
        fn success(detail: ProjectDetail) -> Self {
            Self {
                result: Ok(detail),
                received: Arc::new(Mutex::new(None)),
            }
        }

        fn error(err: CreateProjectError) -> Self {
            Self {
                result: Err(err),
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl CreateProjectUseCase for MockCreateProjectUseCase {
        async fn execute(&self, draft: ProjectDraft) -> Result<ProjectDetail, CreateProjectError> {
            *self.received.lock().unwrap() = Some(draft);
            self.result.clone()
        }
    }

    async fn post(mock: MockCreateProjectUseCase, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_project(ProjectUseCases {
                create: Arc::new(mock),
                ..default_project_use_cases()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_session_guard()))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(admin_auth_header())
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    /* --------------------------------------------------
     * Cases
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_success() {
        let mock = MockCreateProjectUseCase::success(sample_detail("API"));
        let received = mock.received.clone();

        let (status, body) = post(
            mock,
            json!({
                "title": "  API  ",
                "tech_stack": "Rust, Actix, ,Postgres",
                "display_order": 2,
                "is_published": true,
                "images": [
                    { "image_url": "https://cdn/a.png" },
                    { "image_url": "https://cdn/b.png" }
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "API");

        let draft = received.lock().unwrap().clone().unwrap();
        assert_eq!(draft.title, "API");
        assert_eq!(draft.tech_stack, vec!["Rust", "Actix", "Postgres"]);
        assert_eq!(draft.images[1].display_order, 1);
    }

    #[actix_web::test]
    async fn test_create_project_missing_title() {
        let (status, body) = post(
            MockCreateProjectUseCase::success(sample_detail("unused")),
            json!({ "title": "   ", "display_order": 1 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_create_project_invalid_child() {
        let (status, body) = post(
            MockCreateProjectUseCase::success(sample_detail("unused")),
            json!({
                "title": "API",
                "display_order": 1,
                "buttons": [{ "label": "Live", "url": "" }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Button URL is required");
    }

    #[actix_web::test]
    async fn test_create_project_repository_error() {
        let (status, _) = post(
            MockCreateProjectUseCase::error(CreateProjectError::RepositoryError("db".into())),
            json!({ "title": "API", "display_order": 1 }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
