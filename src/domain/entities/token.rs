use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{entities::user::User, errors::AuthError};

/// Payload of a session token. `sub` is the user id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            exp: (issued_at + lifetime).timestamp() as usize,
            iat: issued_at.timestamp() as usize,
        }
    }

    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidSubject)
    }
}

/// Identity of the caller as returned by `/api/auth/me`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        CurrentUser {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        }
    }
}
