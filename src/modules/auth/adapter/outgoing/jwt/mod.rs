mod jwt_config;
mod jwt_session_verifier;

pub use jwt_config::JwtConfig;
pub use jwt_session_verifier::JwtSessionVerifier;
