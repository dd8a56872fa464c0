use crate::achievement::application::domain::entities::{Achievement, AchievementDraft};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, fetch_admin_profile::IFetchAdminProfileUseCase,
    login_admin::ILoginAdminUseCase, logout_admin::ILogoutAdminUseCase,
    refresh_session::IRefreshSessionUseCase,
};
use crate::certification::application::domain::entities::{Certification, CertificationDraft};
use crate::dashboard::application::ports::DashboardUseCase;
use crate::education::application::domain::entities::{Education, EducationDraft};
use crate::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::media::application::ports::MediaUseCase;
use crate::message::application::ports::MessageUseCase;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::publication::application::domain::entities::{Publication, PublicationDraft};
use crate::resume::application::ports::ResumeUseCase;
use crate::shared::content::ContentUseCase;
use crate::site_settings::application::ports::SettingsUseCase;
use crate::skill::application::domain::entities::{Skill, SkillDraft};
use crate::subscriber::application::ports::SubscriberUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case not under test answers like an empty site.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    experience: Arc<dyn ContentUseCase<Experience, ExperienceDraft>>,
    education: Arc<dyn ContentUseCase<Education, EducationDraft>>,
    skill: Arc<dyn ContentUseCase<Skill, SkillDraft>>,
    certification: Arc<dyn ContentUseCase<Certification, CertificationDraft>>,
    achievement: Arc<dyn ContentUseCase<Achievement, AchievementDraft>>,
    publication: Arc<dyn ContentUseCase<Publication, PublicationDraft>>,
    project: ProjectUseCases,
    message: Arc<dyn MessageUseCase>,
    subscriber: Arc<dyn SubscriberUseCase>,
    resume: Arc<dyn ResumeUseCase>,
    media: Arc<dyn MediaUseCase>,
    site_settings: Arc<dyn SettingsUseCase>,
    dashboard: Arc<dyn DashboardUseCase>,
}

pub fn default_project_use_cases() -> ProjectUseCases {
    ProjectUseCases {
        get_list: Arc::new(DefaultStubGetProjectsUseCase),
        get_categories: Arc::new(DefaultStubGetProjectCategoriesUseCase),
        get_single: Arc::new(DefaultStubGetSingleProjectUseCase),
        get_public_single: Arc::new(DefaultStubGetPublicSingleProjectUseCase),
        create: Arc::new(DefaultStubCreateProjectUseCase),
        update: Arc::new(DefaultStubUpdateProjectUseCase),
        hard_delete: Arc::new(DefaultStubHardDeleteProjectUseCase),
    }
}

fn default_auth_use_cases() -> AuthUseCases {
    AuthUseCases {
        login: Arc::new(StubLoginAdminUseCase),
        refresh: Arc::new(StubRefreshSessionUseCase),
        logout: Arc::new(StubLogoutAdminUseCase),
        profile: Arc::new(StubFetchAdminProfileUseCase),
        change_password: Arc::new(StubChangePasswordUseCase),
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: default_auth_use_cases(),
            experience: Arc::new(StubContentUseCase::<Experience>::default()),
            education: Arc::new(StubContentUseCase::<Education>::default()),
            skill: Arc::new(StubContentUseCase::<Skill>::default()),
            certification: Arc::new(StubContentUseCase::<Certification>::default()),
            achievement: Arc::new(StubContentUseCase::<Achievement>::default()),
            publication: Arc::new(StubContentUseCase::<Publication>::default()),
            project: default_project_use_cases(),
            message: Arc::new(StubMessageUseCase::default()),
            subscriber: Arc::new(StubSubscriberUseCase::default()),
            resume: Arc::new(StubResumeUseCase::empty()),
            media: Arc::new(StubMediaUseCase::default()),
            site_settings: Arc::new(StubSettingsUseCase::default()),
            dashboard: Arc::new(StubDashboardUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    // Auth
    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_session(mut self, uc: impl IRefreshSessionUseCase + 'static) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(mut self, uc: impl ILogoutAdminUseCase + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_fetch_admin_profile(
        mut self,
        uc: impl IFetchAdminProfileUseCase + 'static,
    ) -> Self {
        self.auth.profile = Arc::new(uc);
        self
    }

    pub fn with_change_password(mut self, uc: impl IChangePasswordUseCase + 'static) -> Self {
        self.auth.change_password = Arc::new(uc);
        self
    }

    // Portfolio sections
    pub fn with_experience(
        mut self,
        uc: impl ContentUseCase<Experience, ExperienceDraft> + 'static,
    ) -> Self {
        self.experience = Arc::new(uc);
        self
    }

    pub fn with_education(
        mut self,
        uc: impl ContentUseCase<Education, EducationDraft> + 'static,
    ) -> Self {
        self.education = Arc::new(uc);
        self
    }

    pub fn with_skill(mut self, uc: impl ContentUseCase<Skill, SkillDraft> + 'static) -> Self {
        self.skill = Arc::new(uc);
        self
    }

    pub fn with_certification(
        mut self,
        uc: impl ContentUseCase<Certification, CertificationDraft> + 'static,
    ) -> Self {
        self.certification = Arc::new(uc);
        self
    }

    pub fn with_achievement(
        mut self,
        uc: impl ContentUseCase<Achievement, AchievementDraft> + 'static,
    ) -> Self {
        self.achievement = Arc::new(uc);
        self
    }

    pub fn with_publication(
        mut self,
        uc: impl ContentUseCase<Publication, PublicationDraft> + 'static,
    ) -> Self {
        self.publication = Arc::new(uc);
        self
    }

    pub fn with_project(mut self, project: ProjectUseCases) -> Self {
        self.project = project;
        self
    }

    // Inbox & audience
    pub fn with_message(mut self, uc: impl MessageUseCase + 'static) -> Self {
        self.message = Arc::new(uc);
        self
    }

    pub fn with_subscriber(mut self, uc: impl SubscriberUseCase + 'static) -> Self {
        self.subscriber = Arc::new(uc);
        self
    }

    // Files & site
    pub fn with_resume(mut self, uc: impl ResumeUseCase + 'static) -> Self {
        self.resume = Arc::new(uc);
        self
    }

    pub fn with_media(mut self, uc: impl MediaUseCase + 'static) -> Self {
        self.media = Arc::new(uc);
        self
    }

    pub fn with_site_settings(mut self, uc: impl SettingsUseCase + 'static) -> Self {
        self.site_settings = Arc::new(uc);
        self
    }

    pub fn with_dashboard(mut self, uc: impl DashboardUseCase + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            experience: self.experience,
            education: self.education,
            skill: self.skill,
            certification: self.certification,
            achievement: self.achievement,
            publication: self.publication,
            project: self.project,
            message: self.message,
            subscriber: self.subscriber,
            resume: self.resume,
            media: self.media,
            site_settings: self.site_settings,
            dashboard: self.dashboard,
        })
    }
}
