// src/shared/api/payload_config.rs
use actix_web::web::PayloadConfig;

/// Raw upload bodies (resume PDFs, images). Kept above the 5 MB upload
/// policies so oversized files reach the policy check and get its message.
pub const MAX_UPLOAD_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn upload_payload_config() -> PayloadConfig {
    PayloadConfig::new(MAX_UPLOAD_BODY_BYTES)
}
