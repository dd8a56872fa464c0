pub mod auth_gateway;
pub mod session_blacklist;
pub mod session_verifier;

pub use auth_gateway::{AuthGateway, AuthGatewayError};
pub use session_blacklist::{SessionBlacklist, SessionBlacklistError};
pub use session_verifier::{SessionClaims, SessionTokenError, SessionVerifier};
