use std::sync::Arc;

use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, fetch_admin_profile::IFetchAdminProfileUseCase,
    login_admin::ILoginAdminUseCase, logout_admin::ILogoutAdminUseCase,
    refresh_session::IRefreshSessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshSessionUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub profile: Arc<dyn IFetchAdminProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
}
