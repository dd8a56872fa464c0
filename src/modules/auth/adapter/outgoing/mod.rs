pub mod jwt;
pub mod session_blacklist_redis;
pub mod supabase_auth_client;

pub use session_blacklist_redis::RedisSessionBlacklist;
pub use supabase_auth_client::SupabaseAuthClient;
