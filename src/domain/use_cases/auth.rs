use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password::{hash_password, verify_password},
    entities::{
        token::{Claims, CurrentUser},
        user::{LoginUser, NewUser, Session, User, UserResponse},
    },
    errors::{AppError, AuthError},
    repositories::{token::SessionTokens, user::UserRepository},
};

/// Account creation, credential checks and session tokens.
pub struct AuthHandler<R, T>
where
    R: UserRepository + ?Sized,
    T: SessionTokens,
{
    pub user_repo: Arc<R>,
    pub tokens: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository + ?Sized,
    T: SessionTokens,
{
    pub fn new(user_repo: Arc<R>, tokens: T) -> Self {
        AuthHandler { user_repo, tokens }
    }

    /// Stores a new account and opens a session for it. A taken email
    /// surfaces as `AppError::Conflict` from the repository.
    pub async fn register(&self, request: NewUser) -> Result<Session, AppError> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let user = self.user_repo
            .create_user(&request.prepare_for_insert(password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(self.open_session(&user)?)
    }

    /// Unknown email and wrong password are reported identically.
    pub async fn login(&self, request: LoginUser) -> Result<Session, AuthError> {
        request.validate()?;

        let user = match self.user_repo.get_user_by_email(&request.email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::error!("User lookup failed: {}", e);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        self.open_session(&user)
    }

    fn open_session(&self, user: &User) -> Result<Session, AuthError> {
        Ok(Session {
            user: UserResponse::from(user),
            token: self.tokens.issue(user)?,
        })
    }

    pub fn current_user(&self, claims: Claims) -> CurrentUser {
        CurrentUser::from(claims)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.verify(token)
    }

    pub fn session_lifetime_secs(&self) -> i64 {
        self.tokens.lifetime_secs()
    }
}
