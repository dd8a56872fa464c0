pub mod change_password;
pub mod fetch_admin_profile;
pub mod login_admin;
pub mod logout_admin;
pub mod refresh_session;
