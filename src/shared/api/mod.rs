mod json_config;
mod payload_config;
mod query;
mod response;

pub use json_config::custom_json_config;
pub use payload_config::{upload_payload_config, MAX_UPLOAD_BODY_BYTES};
pub use query::ListQuery;
pub use response::{ApiError, ApiResponse};
