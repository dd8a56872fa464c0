use crate::api::schemas::{ErrorDetail, ErrorResponse, SettingsDocument, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AdminProfileResponse, ChangePasswordDto, ChangePasswordResponse, LoginRequestDto,
    RefreshSessionDto, SessionResponse,
};
use crate::auth::application::use_cases::logout_admin::LogoutResponse;

// Portfolio sections
use crate::achievement::application::domain::entities::{Achievement, AchievementForm};
use crate::certification::application::domain::entities::{Certification, CertificationForm};
use crate::education::application::domain::entities::{Education, EducationForm};
use crate::experience::application::domain::entities::{Experience, ExperienceForm};
use crate::publication::application::domain::entities::{Publication, PublicationForm};
use crate::skill::application::domain::entities::{Skill, SkillForm};

// Projects
use crate::project::application::domain::entities::{
    Project, ProjectButton, ProjectButtonForm, ProjectChildren, ProjectDetail, ProjectForm,
    ProjectImage, ProjectImageForm, ProjectVideo, ProjectVideoForm, PublicProjectDetail,
    TechStackInput,
};

// Inbox, audience, files, site
use crate::dashboard::application::domain::entities::DashboardStats;
use crate::media::application::domain::entities::UploadedImage;
use crate::message::application::domain::entities::{Message, MessageForm};
use crate::resume::application::domain::entities::Resume;
use crate::site_settings::application::domain::entities::SiteSetting;
use crate::subscriber::application::domain::entities::{SubscribeForm, Subscriber};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public site and admin back-office of a personal portfolio",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::refresh_session_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::get_admin_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,

        // Experience endpoints
        crate::experience::adapter::incoming::routes::get_public_experiences_handler,
        crate::experience::adapter::incoming::routes::get_experiences_handler,
        crate::experience::adapter::incoming::routes::create_experience_handler,
        crate::experience::adapter::incoming::routes::update_experience_handler,
        crate::experience::adapter::incoming::routes::delete_experience_handler,

        // Education endpoints
        crate::education::adapter::incoming::routes::get_public_education_handler,
        crate::education::adapter::incoming::routes::get_education_handler,
        crate::education::adapter::incoming::routes::create_education_handler,
        crate::education::adapter::incoming::routes::update_education_handler,
        crate::education::adapter::incoming::routes::delete_education_handler,

        // Skill endpoints
        crate::skill::adapter::incoming::routes::get_public_skills_handler,
        crate::skill::adapter::incoming::routes::get_skills_handler,
        crate::skill::adapter::incoming::routes::get_skill_categories_handler,
        crate::skill::adapter::incoming::routes::create_skill_handler,
        crate::skill::adapter::incoming::routes::update_skill_handler,
        crate::skill::adapter::incoming::routes::delete_skill_handler,

        // Certification endpoints
        crate::certification::adapter::incoming::routes::get_public_certifications_handler,
        crate::certification::adapter::incoming::routes::get_certifications_handler,
        crate::certification::adapter::incoming::routes::create_certification_handler,
        crate::certification::adapter::incoming::routes::update_certification_handler,
        crate::certification::adapter::incoming::routes::delete_certification_handler,

        // Achievement endpoints
        crate::achievement::adapter::incoming::routes::get_public_achievements_handler,
        crate::achievement::adapter::incoming::routes::get_achievements_handler,
        crate::achievement::adapter::incoming::routes::create_achievement_handler,
        crate::achievement::adapter::incoming::routes::update_achievement_handler,
        crate::achievement::adapter::incoming::routes::delete_achievement_handler,

        // Publication endpoints
        crate::publication::adapter::incoming::routes::get_public_publications_handler,
        crate::publication::adapter::incoming::routes::get_publications_handler,
        crate::publication::adapter::incoming::routes::create_publication_handler,
        crate::publication::adapter::incoming::routes::update_publication_handler,
        crate::publication::adapter::incoming::routes::delete_publication_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::get_public_project_categories_handler,
        crate::project::adapter::incoming::web::routes::get_public_projects_handler,
        crate::project::adapter::incoming::web::routes::get_public_single_project_handler,
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::hard_delete_project_handler,

        // Message endpoints
        crate::message::adapter::incoming::routes::submit_message_handler,
        crate::message::adapter::incoming::routes::get_messages_handler,
        crate::message::adapter::incoming::routes::mark_message_read_handler,
        crate::message::adapter::incoming::routes::delete_message_handler,

        // Subscriber endpoints
        crate::subscriber::adapter::incoming::routes::subscribe_handler,
        crate::subscriber::adapter::incoming::routes::get_subscribers_handler,
        crate::subscriber::adapter::incoming::routes::export_subscribers_handler,
        crate::subscriber::adapter::incoming::routes::delete_subscriber_handler,

        // Resume endpoints
        crate::resume::adapter::incoming::routes::get_public_resume_handler,
        crate::resume::adapter::incoming::routes::get_resume_handler,
        crate::resume::adapter::incoming::routes::upload_resume_handler,
        crate::resume::adapter::incoming::routes::delete_resume_handler,

        // Media endpoints
        crate::media::adapter::incoming::routes::upload_image_handler,
        crate::media::adapter::incoming::routes::delete_image_handler,

        // Site settings endpoints
        crate::site_settings::adapter::incoming::routes::get_public_settings_handler,
        crate::site_settings::adapter::incoming::routes::get_public_setting_handler,
        crate::site_settings::adapter::incoming::routes::update_settings_handler,

        // Dashboard
        crate::dashboard::adapter::incoming::routes::get_dashboard_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SessionResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            RefreshSessionDto,
            ChangePasswordDto,
            ChangePasswordResponse,
            SessionResponse,
            AdminProfileResponse,
            LogoutResponse,

            // Sections
            Experience,
            ExperienceForm,
            Education,
            EducationForm,
            Skill,
            SkillForm,
            Certification,
            CertificationForm,
            Achievement,
            AchievementForm,
            Publication,
            PublicationForm,

            // Projects
            Project,
            ProjectImage,
            ProjectVideo,
            ProjectButton,
            ProjectChildren,
            ProjectDetail,
            PublicProjectDetail,
            ProjectForm,
            ProjectImageForm,
            ProjectVideoForm,
            ProjectButtonForm,
            TechStackInput,

            // Inbox, audience, files, site
            Message,
            MessageForm,
            Subscriber,
            SubscribeForm,
            Resume,
            UploadedImage,
            SiteSetting,
            SettingsDocument,
            DashboardStats
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and session endpoints"),
        (name = "experience", description = "Work history"),
        (name = "education", description = "Schools and degrees"),
        (name = "skill", description = "Skills grouped by category"),
        (name = "certification", description = "Certificates"),
        (name = "achievement", description = "Awards and achievements"),
        (name = "publication", description = "Articles and papers"),
        (name = "project", description = "Portfolio projects with images, videos and buttons"),
        (name = "message", description = "Contact form inbox"),
        (name = "subscriber", description = "Newsletter subscribers"),
        (name = "resume", description = "Downloadable resume PDF"),
        (name = "media", description = "Image uploads for the admin editor"),
        (name = "site_settings", description = "Site name, tagline and contact links"),
        (name = "dashboard", description = "Admin landing page figures"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
