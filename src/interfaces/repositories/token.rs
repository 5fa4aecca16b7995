use crate::{entities::{token::Claims, user::User}, errors::AuthError};

/// Signs and verifies the session tokens carried in the `token` cookie.
pub trait SessionTokens: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, AuthError>;

    /// Checks signature and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;

    fn lifetime_secs(&self) -> i64;
}
