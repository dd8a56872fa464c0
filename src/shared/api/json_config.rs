// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Admin forms can carry long rich-text project descriptions.
const MAX_JSON_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!(error = %message, "Rejected JSON payload");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::validation_error(&message),
            )
            .into()
        })
}
