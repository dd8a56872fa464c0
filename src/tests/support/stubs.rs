use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AdminProfile, AdminSession, AuthSession};
use crate::auth::application::use_cases::{
    change_password::{ChangePasswordCommand, ChangePasswordError, IChangePasswordUseCase},
    fetch_admin_profile::{FetchAdminProfileError, IFetchAdminProfileUseCase},
    login_admin::{ILoginAdminUseCase, LoginCommand, LoginError},
    logout_admin::{ILogoutAdminUseCase, LogoutError, LogoutResponse},
    refresh_session::{IRefreshSessionUseCase, RefreshSessionError, RefreshSessionRequest},
};
use crate::dashboard::application::domain::entities::DashboardStats;
use crate::dashboard::application::ports::{DashboardError, DashboardUseCase};
use crate::media::application::domain::entities::UploadedImage;
use crate::media::application::ports::{MediaError, MediaUseCase};
use crate::message::application::domain::entities::{Message, MessageDraft, MessageSearch};
use crate::message::application::ports::{MessageError, MessageUseCase};
use crate::project::application::domain::entities::{
    Project, ProjectDetail, ProjectDraft, ProjectListFilter, PublicProjectDetail,
};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, GetProjectCategoriesError,
    GetProjectCategoriesUseCase, GetProjectsError, GetProjectsUseCase,
    GetPublicSingleProjectError, GetPublicSingleProjectUseCase, GetSingleProjectError,
    GetSingleProjectUseCase, HardDeleteProjectError, HardDeleteProjectUseCase, UpdateProjectError,
    UpdateProjectUseCase,
};
use crate::resume::application::domain::entities::{Resume, ResumeFile};
use crate::resume::application::ports::{ResumeError, ResumeUseCase};
use crate::shared::content::{ContentError, ContentUseCase, Visibility};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::site_settings::application::domain::entities::{SettingsMap, SettingsUpdate, SiteSetting};
use crate::site_settings::application::ports::{SettingsError, SettingsUseCase};
use crate::subscriber::application::domain::csv_export::subscribers_csv;
use crate::subscriber::application::domain::entities::{Subscriber, SubscriberDraft};
use crate::subscriber::application::ports::{SubscriberError, SubscriberUseCase};

// ──────────────────────────────────────────────────────────
// Portfolio sections
// ──────────────────────────────────────────────────────────

/// Serves fixed rows for any section; `failing` turns every call into the error.
#[derive(Clone)]
pub struct StubContentUseCase<T> {
    rows: Vec<T>,
    error: Option<ContentError>,
}

impl<T> Default for StubContentUseCase<T> {
    fn default() -> Self {
        Self {
            rows: vec![],
            error: None,
        }
    }
}

impl<T> StubContentUseCase<T> {
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self { rows, error: None }
    }

    pub fn failing(error: ContentError) -> Self {
        Self {
            rows: vec![],
            error: Some(error),
        }
    }

    fn check(&self) -> Result<(), ContentError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl<T: Clone> StubContentUseCase<T> {
    fn first(&self) -> Result<T, ContentError> {
        self.check()?;
        self.rows.first().cloned().ok_or(ContentError::NotFound)
    }
}

#[async_trait]
impl<T, D> ContentUseCase<T, D> for StubContentUseCase<T>
where
    T: Clone + Send + Sync + 'static,
    D: Send + 'static,
{
    async fn list_published(&self) -> Result<Vec<T>, ContentError> {
        self.check()?;
        Ok(self.rows.clone())
    }

    async fn list_all(&self) -> Result<Vec<T>, ContentError> {
        self.check()?;
        Ok(self.rows.clone())
    }

    async fn create(&self, _draft: D) -> Result<T, ContentError> {
        self.first()
    }

    async fn update(&self, _id: Uuid, _draft: D) -> Result<T, ContentError> {
        self.first()
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ContentError> {
        self.check()
    }
}

// ──────────────────────────────────────────────────────────
// Messages & subscribers
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubMessageUseCase {
    rows: Vec<Message>,
    error: Option<MessageError>,
}

impl StubMessageUseCase {
    pub fn with_rows(rows: Vec<Message>) -> Self {
        Self { rows, error: None }
    }

    pub fn failing(error: MessageError) -> Self {
        Self {
            rows: vec![],
            error: Some(error),
        }
    }

    fn check(&self) -> Result<(), MessageError> {
        self.error.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl MessageUseCase for StubMessageUseCase {
    async fn submit(&self, draft: MessageDraft) -> Result<Message, MessageError> {
        self.check()?;
        Ok(Message {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            message: draft.message,
            is_read: false,
            created_at: Utc::now(),
        })
    }

    async fn list(
        &self,
        _search: MessageSearch,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageError> {
        self.check()?;
        Ok(page_of(&self.rows, page))
    }

    async fn mark_read(&self, _id: Uuid) -> Result<Message, MessageError> {
        self.check()?;
        let mut message = self.rows.first().cloned().ok_or(MessageError::NotFound)?;
        message.is_read = true;
        Ok(message)
    }

    async fn delete(&self, _id: Uuid) -> Result<(), MessageError> {
        self.check()
    }
}

/// Slices `rows` the way the database paginator would.
fn page_of<T: Clone>(rows: &[T], page: PageRequest) -> PageResult<T> {
    let items = rows
        .iter()
        .skip(page.index() as usize * page.per_page as usize)
        .take(page.per_page as usize)
        .cloned()
        .collect();
    PageResult::new(items, page, rows.len() as u64)
}

#[derive(Default, Clone)]
pub struct StubSubscriberUseCase {
    rows: Vec<Subscriber>,
    error: Option<SubscriberError>,
}

impl StubSubscriberUseCase {
    pub fn with_rows(rows: Vec<Subscriber>) -> Self {
        Self { rows, error: None }
    }

    pub fn failing(error: SubscriberError) -> Self {
        Self {
            rows: vec![],
            error: Some(error),
        }
    }

    fn check(&self) -> Result<(), SubscriberError> {
        self.error.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl SubscriberUseCase for StubSubscriberUseCase {
    async fn subscribe(&self, draft: SubscriberDraft) -> Result<Subscriber, SubscriberError> {
        self.check()?;
        Ok(Subscriber {
            id: Uuid::new_v4(),
            email: draft.email,
            subscribed_at: Utc::now(),
        })
    }

    async fn list(
        &self,
        _search: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Subscriber>, SubscriberError> {
        self.check()?;
        Ok(page_of(&self.rows, page))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), SubscriberError> {
        self.check()
    }

    async fn export_csv(&self) -> Result<String, SubscriberError> {
        self.check()?;
        Ok(subscribers_csv(&self.rows))
    }
}

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct DefaultStubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
        _visibility: Visibility,
    ) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubGetProjectCategoriesUseCase;

#[async_trait]
impl GetProjectCategoriesUseCase for DefaultStubGetProjectCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<String>, GetProjectCategoriesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for DefaultStubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<ProjectDetail, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubGetPublicSingleProjectUseCase;

#[async_trait]
impl GetPublicSingleProjectUseCase for DefaultStubGetPublicSingleProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
    ) -> Result<PublicProjectDetail, GetPublicSingleProjectError> {
        Err(GetPublicSingleProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for DefaultStubCreateProjectUseCase {
    async fn execute(&self, _draft: ProjectDraft) -> Result<ProjectDetail, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for DefaultStubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _draft: ProjectDraft,
    ) -> Result<ProjectDetail, UpdateProjectError> {
        Err(UpdateProjectError::ProjectNotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubHardDeleteProjectUseCase;

#[async_trait]
impl HardDeleteProjectUseCase for DefaultStubHardDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), HardDeleteProjectError> {
        Err(HardDeleteProjectError::ProjectNotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshSessionUseCase;

#[async_trait]
impl IRefreshSessionUseCase for StubRefreshSessionUseCase {
    async fn execute(
        &self,
        _request: RefreshSessionRequest,
    ) -> Result<AuthSession, RefreshSessionError> {
        Err(RefreshSessionError::InvalidRefreshToken)
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutAdminUseCase;

#[async_trait]
impl ILogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _session: AdminSession) -> Result<LogoutResponse, LogoutError> {
        Ok(LogoutResponse {
            message: "Logged out".into(),
        })
    }
}

#[derive(Default, Clone)]
pub struct StubFetchAdminProfileUseCase;

#[async_trait]
impl IFetchAdminProfileUseCase for StubFetchAdminProfileUseCase {
    async fn execute(&self, _access_token: &str) -> Result<AdminProfile, FetchAdminProfileError> {
        Err(FetchAdminProfileError::SessionExpired)
    }
}

#[derive(Default, Clone)]
pub struct StubChangePasswordUseCase;

#[async_trait]
impl IChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(
        &self,
        _access_token: &str,
        _command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Resume, media, settings, dashboard
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubResumeUseCase {
    current: Option<Resume>,
}

impl StubResumeUseCase {
    pub fn empty() -> Self {
        Self { current: None }
    }

    pub fn with_resume(resume: Resume) -> Self {
        Self {
            current: Some(resume),
        }
    }
}

#[async_trait]
impl ResumeUseCase for StubResumeUseCase {
    async fn current(&self) -> Result<Option<Resume>, ResumeError> {
        Ok(self.current.clone())
    }

    async fn replace(&self, file: ResumeFile) -> Result<Resume, ResumeError> {
        Ok(Resume {
            id: Uuid::new_v4(),
            file_url: format!("https://storage.test/resumes/{}", file.filename),
            filename: file.filename,
            uploaded_at: Utc::now(),
        })
    }

    async fn remove(&self) -> Result<(), ResumeError> {
        self.current.as_ref().map(|_| ()).ok_or(ResumeError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubMediaUseCase {
    error: Option<MediaError>,
}

impl StubMediaUseCase {
    pub fn failing(error: MediaError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl MediaUseCase for StubMediaUseCase {
    async fn upload_image(
        &self,
        _content_type: &str,
        _filename: &str,
        _bytes: Vec<u8>,
    ) -> Result<UploadedImage, MediaError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        Ok(UploadedImage {
            path: "stub.png".into(),
            public_url: "https://storage.test/images/stub.png".into(),
        })
    }

    async fn delete_image(&self, _path: &str) -> Result<(), MediaError> {
        self.error.clone().map_or(Ok(()), Err)
    }
}

/// In-memory settings; `update` merges into a copy and returns it.
#[derive(Default, Clone)]
pub struct StubSettingsUseCase {
    values: SettingsMap,
}

impl StubSettingsUseCase {
    pub fn with_values(values: &[(&str, Option<&str>)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

#[async_trait]
impl SettingsUseCase for StubSettingsUseCase {
    async fn all(&self) -> Result<SettingsMap, SettingsError> {
        Ok(self.values.clone())
    }

    async fn get(&self, key: &str) -> Result<SiteSetting, SettingsError> {
        let value = self.values.get(key).ok_or(SettingsError::NotFound)?;
        Ok(SiteSetting {
            setting_key: key.to_string(),
            setting_value: value.clone(),
            updated_at: Utc::now(),
        })
    }

    async fn update(&self, update: SettingsUpdate) -> Result<SettingsMap, SettingsError> {
        let mut values = self.values.clone();
        for (key, value) in update.into_entries() {
            values.insert(key.as_str().to_string(), value);
        }
        Ok(values)
    }
}

#[derive(Default, Clone)]
pub struct StubDashboardUseCase {
    fail: bool,
}

impl StubDashboardUseCase {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl DashboardUseCase for StubDashboardUseCase {
    async fn stats(&self) -> Result<DashboardStats, DashboardError> {
        if self.fail {
            return Err(DashboardError::QueryError("connection reset".into()));
        }
        Ok(DashboardStats {
            total_projects: 0,
            total_messages: 0,
            unread_messages: 0,
            total_subscribers: 0,
            total_skills: 0,
            recent_messages: vec![],
        })
    }
}
