use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::project::application::ports::incoming::use_cases::GetProjectCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Categories in use by published projects, for the portfolio filter bar
#[utoipa::path(
    get,
    path = "/api/public/projects/categories",
    tag = "project",
    responses(
        (status = 200, description = "Sorted distinct categories", body = inline(SuccessResponse<Vec<String>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/projects/categories")]
pub async fn get_public_project_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(GetProjectCategoriesError::QueryFailed(msg)) => {
            error!("Failed to load project categories: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::project::application::ports::incoming::use_cases::GetProjectCategoriesUseCase;
    use crate::project::application::project_use_cases::ProjectUseCases;
    use crate::tests::support::app_state_builder::{default_project_use_cases, TestAppStateBuilder};

    struct FixedCategories(Result<Vec<String>, GetProjectCategoriesError>);

    #[async_trait]
    impl GetProjectCategoriesUseCase for FixedCategories {
        async fn execute(&self) -> Result<Vec<String>, GetProjectCategoriesError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<Vec<String>, GetProjectCategoriesError>) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_project(ProjectUseCases {
                get_categories: Arc::new(FixedCategories(result)),
                ..default_project_use_cases()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_project_categories_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/projects/categories")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_categories_are_returned() {
        let (status, body) = call(Ok(vec!["Mobile".into(), "Web".into()])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!(["Mobile", "Web"]));
    }

    #[actix_web::test]
    async fn test_query_failure_is_500() {
        let (status, body) = call(Err(GetProjectCategoriesError::QueryFailed("x".into()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
