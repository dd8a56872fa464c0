use actix_web::HttpResponse;

use super::ContentError;
use crate::shared::api::ApiResponse;

/// How a section names itself in error responses.
#[derive(Debug, Clone, Copy)]
pub struct ContentKind {
    pub not_found_code: &'static str,
    pub label: &'static str,
}

impl ContentKind {
    pub const fn new(not_found_code: &'static str, label: &'static str) -> Self {
        Self {
            not_found_code,
            label,
        }
    }
}

pub fn content_error_response(err: ContentError, kind: ContentKind) -> HttpResponse {
    match err {
        ContentError::NotFound => {
            ApiResponse::not_found(kind.not_found_code, &format!("{} not found", kind.label))
        }
        ContentError::RepositoryError(msg) => {
            tracing::error!(section = kind.label, error = %msg, "Content repository failure");
            ApiResponse::internal_error()
        }
    }
}
