use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{AdminProfile, AuthSession},
    ports::outgoing::{AuthGateway, AuthGatewayError, SessionBlacklist, SessionBlacklistError},
};
use crate::shared::storage::{ObjectStorage, StorageError, StoredObject};

mock! {
    pub AuthGateway {}

    #[async_trait]
    impl AuthGateway for AuthGateway {
        async fn sign_in_with_password(
            &self,
            email: &str,
            password: &str,
        ) -> Result<AuthSession, AuthGatewayError>;

        async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AuthGatewayError>;

        async fn sign_out(&self, access_token: &str) -> Result<(), AuthGatewayError>;

        async fn get_user(&self, access_token: &str) -> Result<AdminProfile, AuthGatewayError>;

        async fn update_password(
            &self,
            access_token: &str,
            new_password: &str,
        ) -> Result<(), AuthGatewayError>;
    }
}

mock! {
    pub SessionBlacklistStore {}

    #[async_trait]
    impl SessionBlacklist for SessionBlacklistStore {
        async fn revoke(
            &self,
            token_hash: String,
            admin_id: Uuid,
            expires_at: DateTime<Utc>,
        ) -> Result<(), SessionBlacklistError>;

        async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl ObjectStorage for Storage {
        async fn upload(
            &self,
            bucket: &str,
            path: &str,
            content_type: &str,
            bytes: Vec<u8>,
        ) -> Result<StoredObject, StorageError>;

        async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError>;

        fn public_url(&self, bucket: &str, path: &str) -> String;
    }
}
