use crate::config::SupabaseConfig;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// `aud` claim the auth service puts on signed-in user tokens.
    pub audience: String,
    pub leeway_seconds: u64,
}

impl JwtConfig {
    pub const DEFAULT_AUDIENCE: &'static str = "authenticated";

    pub fn from_supabase(config: &SupabaseConfig) -> Self {
        Self {
            secret_key: config.jwt_secret.clone(),
            audience: Self::DEFAULT_AUDIENCE.to_string(),
            leeway_seconds: 30,
        }
    }
}
