use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

use crate::{
    entities::{token::Claims, user::User},
    errors::AuthError,
    repositories::token::SessionTokens,
    settings::{AppConfig, JwtKeys},
};

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

/// HS512 session tokens signed with the configured secret.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    lifetime: Duration,
    validation: Validation,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        JwtService {
            keys: JwtKeys::from(config),
            lifetime: Duration::minutes(config.jwt_expiration_minutes),
            validation,
        }
    }
}

impl SessionTokens for JwtService {
    fn issue(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims::for_user(user, Utc::now(), self.lifetime);

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::warn!(user_id = %user.id, "Failed to sign session token: {}", e);
            AuthError::TokenCreation
        })
    }

    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::from)
    }

    fn lifetime_secs(&self) -> i64 {
        self.lifetime.num_seconds()
    }
}
