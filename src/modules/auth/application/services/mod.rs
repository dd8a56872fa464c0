pub mod session_guard;
pub mod token_hasher;

pub use session_guard::{SessionGuard, SessionGuardError};
pub use token_hasher::hash_token;
