use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::AdminSession;
use crate::project::application::ports::incoming::use_cases::HardDeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "project",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project and its media rows deleted"),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/projects/{id}")]
pub async fn hard_delete_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.hard_delete.execute(project_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(HardDeleteProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(HardDeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::project::application::ports::incoming::use_cases::HardDeleteProjectUseCase;
    use crate::project::application::project_use_cases::ProjectUseCases;
    use crate::tests::support::app_state_builder::{default_project_use_cases, TestAppStateBuilder};
    use crate::tests::support::auth_helper::{admin_auth_header, test_session_guard};

    struct FixedDelete(Result<(), HardDeleteProjectError>);

    #[async_trait]
    impl HardDeleteProjectUseCase for FixedDelete {
        async fn execute(&self, _project_id: Uuid) -> Result<(), HardDeleteProjectError> {
            self.0.clone()
        }
    }

    async fn delete(result: Result<(), HardDeleteProjectError>, with_auth: bool) -> StatusCode {
        let state = TestAppStateBuilder::default()
            .with_project(ProjectUseCases {
                hard_delete: Arc::new(FixedDelete(result)),
                ..default_project_use_cases()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_session_guard()))
                .service(hard_delete_project_handler),
        )
        .await;

        let mut req =
            test::TestRequest::delete().uri(&format!("/api/admin/projects/{}", Uuid::new_v4()));
        if with_auth {
            req = req.insert_header(admin_auth_header());
        }
        test::call_service(&app, req.to_request()).await.status()
    }

    #[actix_web::test]
    async fn test_delete_returns_204() {
        assert_eq!(delete(Ok(()), true).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_missing_is_404() {
        assert_eq!(
            delete(Err(HardDeleteProjectError::ProjectNotFound), true).await,
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_delete_without_session_is_401() {
        assert_eq!(delete(Ok(()), false).await, StatusCode::UNAUTHORIZED);
    }
}
