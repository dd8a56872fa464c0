use std::collections::HashSet;
use std::env;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Connection details of the hosted backend project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub service_role_key: String,
    pub jwt_secret: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub redis_url: String,
    pub supabase: SupabaseConfig,
    pub resume_bucket: String,
    pub media_bucket: String,
    /// Lower-cased; empty means any authenticated user of the project is an admin.
    pub admin_emails: HashSet<String>,
}

/// Loads `.env.{RUST_ENV}`, falling back to `.env`.
pub fn load_env_file() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub const DEFAULT_RESUME_BUCKET: &'static str = "resumes";
    pub const DEFAULT_MEDIA_BUCKET: &'static str = "images";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = optional("PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?;

        let database_max_connections = optional("DATABASE_MAX_CONNECTIONS", "20")
            .parse::<u32>()
            .map_err(|e| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?;

        let supabase_url = required("SUPABASE_URL")?;
        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_URL",
                reason: "must start with http:// or https://".to_string(),
            });
        }

        // HS256 keys shorter than this are rejected by the hosted project anyway.
        let jwt_secret = required("SUPABASE_JWT_SECRET")?;
        if jwt_secret.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_JWT_SECRET",
                reason: "must be at least 32 characters long".to_string(),
            });
        }

        let admin_emails = lookup("ADMIN_EMAILS")
            .unwrap_or_default()
            .split(',')
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Ok(Self {
            host: optional("HOST", "127.0.0.1"),
            port,
            database_url: required("DATABASE_URL")?,
            database_max_connections,
            redis_url: required("REDIS_URL")?,
            supabase: SupabaseConfig {
                url: supabase_url.trim_end_matches('/').to_string(),
                anon_key: required("SUPABASE_ANON_KEY")?,
                service_role_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
                jwt_secret,
            },
            resume_bucket: optional("RESUME_BUCKET", Self::DEFAULT_RESUME_BUCKET),
            media_bucket: optional("MEDIA_BUCKET", Self::DEFAULT_MEDIA_BUCKET),
            admin_emails,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
