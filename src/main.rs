pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{
    achievement, auth, certification, dashboard, education, experience, media, message, project,
    publication, resume, site_settings, skill, subscriber,
};

use crate::achievement::adapter::outgoing::AchievementRepositoryPostgres;
use crate::achievement::application::domain::entities::{Achievement, AchievementDraft};
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtSessionVerifier};
use crate::auth::adapter::outgoing::{RedisSessionBlacklist, SupabaseAuthClient};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::entities::AdminAllowList;
use crate::auth::application::ports::outgoing::{AuthGateway, SessionBlacklist};
use crate::auth::application::services::SessionGuard;
use crate::auth::application::use_cases::{
    change_password::ChangePasswordUseCase, fetch_admin_profile::FetchAdminProfileUseCase,
    login_admin::LoginAdminUseCase, logout_admin::LogoutAdminUseCase,
    refresh_session::RefreshSessionUseCase,
};
use crate::certification::adapter::outgoing::CertificationRepositoryPostgres;
use crate::certification::application::domain::entities::{Certification, CertificationDraft};
use crate::config::{load_env_file, AppConfig};
use crate::dashboard::adapter::outgoing::DashboardQueryPostgres;
use crate::dashboard::application::ports::DashboardUseCase;
use crate::dashboard::application::service::DashboardService;
use crate::education::adapter::outgoing::EducationRepositoryPostgres;
use crate::education::application::domain::entities::{Education, EducationDraft};
use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::media::application::ports::MediaUseCase;
use crate::media::application::service::MediaService;
use crate::message::adapter::outgoing::MessageRepositoryPostgres;
use crate::message::application::ports::MessageUseCase;
use crate::message::application::service::MessageService;
use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, GetProjectCategoriesService, GetProjectsService,
    GetPublicSingleProjectService, GetSingleProjectService, HardDeleteProjectService,
    UpdateProjectService,
};
use crate::publication::adapter::outgoing::PublicationRepositoryPostgres;
use crate::publication::application::domain::entities::{Publication, PublicationDraft};
use crate::resume::adapter::outgoing::ResumeRepositoryPostgres;
use crate::resume::application::ports::ResumeUseCase;
use crate::resume::application::service::ResumeService;
use crate::shared::api::{custom_json_config, upload_payload_config};
use crate::shared::content::{ContentService, ContentUseCase};
use crate::shared::storage::{ObjectStorage, SupabaseStorage};
use crate::site_settings::adapter::outgoing::SettingsRepositoryPostgres;
use crate::site_settings::application::ports::SettingsUseCase;
use crate::site_settings::application::service::SettingsService;
use crate::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::skill::application::domain::entities::{Skill, SkillDraft};
use crate::subscriber::adapter::outgoing::SubscriberRepositoryPostgres;
use crate::subscriber::application::ports::SubscriberUseCase;
use crate::subscriber::application::service::SubscriberService;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config as RedisConfig, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub experience: Arc<dyn ContentUseCase<Experience, ExperienceDraft>>,
    pub education: Arc<dyn ContentUseCase<Education, EducationDraft>>,
    pub skill: Arc<dyn ContentUseCase<Skill, SkillDraft>>,
    pub certification: Arc<dyn ContentUseCase<Certification, CertificationDraft>>,
    pub achievement: Arc<dyn ContentUseCase<Achievement, AchievementDraft>>,
    pub publication: Arc<dyn ContentUseCase<Publication, PublicationDraft>>,
    pub project: ProjectUseCases,
    pub message: Arc<dyn MessageUseCase>,
    pub subscriber: Arc<dyn SubscriberUseCase>,
    pub resume: Arc<dyn ResumeUseCase>,
    pub media: Arc<dyn MediaUseCase>,
    pub site_settings: Arc<dyn SettingsUseCase>,
    pub dashboard: Arc<dyn DashboardUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // .env.{RUST_ENV} first, then .env
    load_env_file();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.database_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    // Redis connection (rediss:// needs a process-wide TLS provider)
    let _ = rustls::crypto::ring::default_provider().install_default();
    let redis_pool = RedisConfig::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Hosted backend: auth + storage share one HTTP client
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .context("Failed to build HTTP client")?;

    let auth_gateway: Arc<dyn AuthGateway> = Arc::new(SupabaseAuthClient::new(
        http.clone(),
        &config.supabase.url,
        config.supabase.anon_key.clone(),
    ));
    let storage: Arc<dyn ObjectStorage> = Arc::new(SupabaseStorage::new(
        http,
        &config.supabase.url,
        config.supabase.service_role_key.clone(),
    ));
    let blacklist: Arc<dyn SessionBlacklist> =
        Arc::new(RedisSessionBlacklist::new(Arc::clone(&redis_arc)));
    let allow_list = AdminAllowList::new(&config.admin_emails);

    let session_guard = SessionGuard::new(
        Arc::new(JwtSessionVerifier::new(JwtConfig::from_supabase(
            &config.supabase,
        ))),
        Arc::clone(&blacklist),
        allow_list.clone(),
    );

    let auth = AuthUseCases {
        login: Arc::new(LoginAdminUseCase::new(Arc::clone(&auth_gateway), allow_list)),
        refresh: Arc::new(RefreshSessionUseCase::new(Arc::clone(&auth_gateway))),
        logout: Arc::new(LogoutAdminUseCase::new(
            Arc::clone(&auth_gateway),
            Arc::clone(&blacklist),
        )),
        profile: Arc::new(FetchAdminProfileUseCase::new(Arc::clone(&auth_gateway))),
        change_password: Arc::new(ChangePasswordUseCase::new(auth_gateway)),
    };

    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project = ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_categories: Arc::new(GetProjectCategoriesService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
        get_public_single: Arc::new(GetPublicSingleProjectService::new(project_query)),
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        hard_delete: Arc::new(HardDeleteProjectService::new(project_repo)),
    };

    let state = AppState {
        auth,
        experience: Arc::new(ContentService::new(ExperienceRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        education: Arc::new(ContentService::new(EducationRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        skill: Arc::new(ContentService::new(SkillRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        certification: Arc::new(ContentService::new(CertificationRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        achievement: Arc::new(ContentService::new(AchievementRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        publication: Arc::new(ContentService::new(PublicationRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        project,
        message: Arc::new(MessageService::new(MessageRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        subscriber: Arc::new(SubscriberService::new(SubscriberRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        resume: Arc::new(ResumeService::new(
            ResumeRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&storage),
            config.resume_bucket.clone(),
        )),
        media: Arc::new(MediaService::new(storage, config.media_bucket.clone())),
        site_settings: Arc::new(SettingsService::new(SettingsRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        dashboard: Arc::new(DashboardService::new(DashboardQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    let openapi = ApiDoc::openapi();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(session_guard.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(upload_payload_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

/// Literal segments (`categories`, `export`) are registered before `{id}`.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::{
        achievement::adapter::incoming::routes as achievements,
        auth::adapter::incoming::web::routes as auth_routes,
        certification::adapter::incoming::routes as certifications,
        dashboard::adapter::incoming::routes as dashboard_routes,
        education::adapter::incoming::routes as education_routes,
        experience::adapter::incoming::routes as experiences,
        media::adapter::incoming::routes as media_routes,
        message::adapter::incoming::routes as messages,
        project::adapter::incoming::web::routes as projects,
        publication::adapter::incoming::routes as publications,
        resume::adapter::incoming::routes as resume_routes,
        site_settings::adapter::incoming::routes as settings,
        skill::adapter::incoming::routes as skills,
        subscriber::adapter::incoming::routes as subscribers,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::login_admin_handler);
    cfg.service(auth_routes::refresh_session_handler);
    cfg.service(auth_routes::logout_admin_handler);
    cfg.service(auth_routes::get_admin_profile_handler);
    cfg.service(auth_routes::change_password_handler);
    // Experience
    cfg.service(experiences::get_public_experiences_handler);
    cfg.service(experiences::get_experiences_handler);
    cfg.service(experiences::create_experience_handler);
    cfg.service(experiences::update_experience_handler);
    cfg.service(experiences::delete_experience_handler);
    // Education
    cfg.service(education_routes::get_public_education_handler);
    cfg.service(education_routes::get_education_handler);
    cfg.service(education_routes::create_education_handler);
    cfg.service(education_routes::update_education_handler);
    cfg.service(education_routes::delete_education_handler);
    // Skills
    cfg.service(skills::get_public_skills_handler);
    cfg.service(skills::get_skill_categories_handler);
    cfg.service(skills::get_skills_handler);
    cfg.service(skills::create_skill_handler);
    cfg.service(skills::update_skill_handler);
    cfg.service(skills::delete_skill_handler);
    // Certifications
    cfg.service(certifications::get_public_certifications_handler);
    cfg.service(certifications::get_certifications_handler);
    cfg.service(certifications::create_certification_handler);
    cfg.service(certifications::update_certification_handler);
    cfg.service(certifications::delete_certification_handler);
    // Achievements
    cfg.service(achievements::get_public_achievements_handler);
    cfg.service(achievements::get_achievements_handler);
    cfg.service(achievements::create_achievement_handler);
    cfg.service(achievements::update_achievement_handler);
    cfg.service(achievements::delete_achievement_handler);
    // Publications
    cfg.service(publications::get_public_publications_handler);
    cfg.service(publications::get_publications_handler);
    cfg.service(publications::create_publication_handler);
    cfg.service(publications::update_publication_handler);
    cfg.service(publications::delete_publication_handler);
    // Projects
    cfg.service(projects::get_public_project_categories_handler);
    cfg.service(projects::get_public_projects_handler);
    cfg.service(projects::get_public_single_project_handler);
    cfg.service(projects::get_projects_handler);
    cfg.service(projects::get_single_project_handler);
    cfg.service(projects::create_project_handler);
    cfg.service(projects::update_project_handler);
    cfg.service(projects::hard_delete_project_handler);
    // Messages
    cfg.service(messages::submit_message_handler);
    cfg.service(messages::get_messages_handler);
    cfg.service(messages::mark_message_read_handler);
    cfg.service(messages::delete_message_handler);
    // Subscribers
    cfg.service(subscribers::subscribe_handler);
    cfg.service(subscribers::export_subscribers_handler);
    cfg.service(subscribers::get_subscribers_handler);
    cfg.service(subscribers::delete_subscriber_handler);
    // Resume
    cfg.service(resume_routes::get_public_resume_handler);
    cfg.service(resume_routes::get_resume_handler);
    cfg.service(resume_routes::upload_resume_handler);
    cfg.service(resume_routes::delete_resume_handler);
    // Media
    cfg.service(media_routes::upload_image_handler);
    cfg.service(media_routes::delete_image_handler);
    // Site settings
    cfg.service(settings::get_public_settings_handler);
    cfg.service(settings::get_public_setting_handler);
    cfg.service(settings::update_settings_handler);
    // Dashboard
    cfg.service(dashboard_routes::get_dashboard_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
