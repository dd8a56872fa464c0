use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use std::fmt;

use crate::auth::application::ports::outgoing::{
    SessionClaims, SessionTokenError, SessionVerifier,
};

use super::jwt_config::JwtConfig;

/// Verifies access tokens signed by the hosted auth service (HS256 with
/// the project's JWT secret). Tokens are never issued here.
#[derive(Clone)]
pub struct JwtSessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtSessionVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSessionVerifier")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtSessionVerifier {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }
}

impl SessionVerifier for JwtSessionVerifier {
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        let decoded =
            decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        SessionTokenError::Expired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        SessionTokenError::InvalidSignature
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Token verification failed: Unexpected audience");
                        SessionTokenError::InvalidAudience
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        SessionTokenError::Malformed
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed");
                        SessionTokenError::Malformed
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;
    use uuid::Uuid;

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";

    #[derive(Serialize)]
    struct IssuedClaims<'a> {
        sub: Uuid,
        exp: i64,
        aud: &'a str,
        email: &'a str,
        role: &'a str,
    }

    fn verifier() -> JwtSessionVerifier {
        JwtSessionVerifier::new(JwtConfig {
            secret_key: SECRET.to_string(),
            audience: JwtConfig::DEFAULT_AUDIENCE.to_string(),
            leeway_seconds: 30,
        })
    }

    fn issue(secret: &str, aud: &str, exp_offset_secs: i64) -> (Uuid, String) {
        let sub = Uuid::new_v4();
        let claims = IssuedClaims {
            sub,
            exp: (Utc::now() + Duration::seconds(exp_offset_secs)).timestamp(),
            aud,
            email: "owner@example.com",
            role: "authenticated",
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Should encode token");
        (sub, token)
    }

    #[test]
    fn accepts_token_issued_by_auth_service() {
        let (sub, token) = issue(SECRET, "authenticated", 3600);

        let claims = verifier().verify(&token).unwrap();
        assert_eq!(claims.sub, sub);
        assert_eq!(claims.email.as_deref(), Some("owner@example.com"));
        assert_eq!(claims.role.as_deref(), Some("authenticated"));
    }

    #[test]
    fn rejects_expired_token() {
        let (_, token) = issue(SECRET, "authenticated", -120);

        assert_eq!(verifier().verify(&token), Err(SessionTokenError::Expired));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let (_, token) = issue("another-secret-that-is-also-long-enough!!", "authenticated", 3600);

        assert_eq!(
            verifier().verify(&token),
            Err(SessionTokenError::InvalidSignature)
        );
    }

    #[test]
    fn rejects_anonymous_audience() {
        let (_, token) = issue(SECRET, "anon", 3600);

        assert_eq!(
            verifier().verify(&token),
            Err(SessionTokenError::InvalidAudience)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            verifier().verify("invalid.jwt.token"),
            Err(SessionTokenError::Malformed)
        );
    }

    #[test]
    fn rejects_payload_that_is_not_json() {
        use base64::{engine::general_purpose, Engine as _};

        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode("not valid json");
        let token = format!("{}.{}.fakesignature", header, payload);

        assert!(verifier().verify(&token).is_err());
    }
}
