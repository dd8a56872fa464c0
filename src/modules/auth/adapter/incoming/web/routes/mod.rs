mod change_password;
mod get_admin_profile;
mod login_admin;
mod logout_admin;
mod refresh_session;
mod session_dto;

pub use change_password::*;
pub use get_admin_profile::*;
pub use login_admin::*;
pub use logout_admin::*;
pub use refresh_session::*;
pub use session_dto::{AdminProfileResponse, SessionResponse};
