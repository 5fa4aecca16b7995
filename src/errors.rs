use std::borrow::Cow;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use serde::Serialize;
use validator::ValidationErrors;

/// Postgres SQLSTATE codes surfaced to clients.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Failure of a request, rendered as `{"error": "..."}`.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Validation failed")]
    Validation(Vec<FieldError>),

    #[display("{_0}")]
    BadRequest(String),

    #[display("{_0}")]
    NotFound(String),

    #[display("{_0}")]
    Conflict(String),

    #[display("{_0}")]
    Unauthorized(&'static str),

    #[display("Forbidden")]
    Forbidden,

    #[display("Internal server error: {_0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [FieldError]>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(details) => ErrorBody {
                error: Cow::Borrowed("Validation failed"),
                details: Some(details),
            },
            // Details stay in the logs.
            AppError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                ErrorBody { error: Cow::Borrowed("Internal server error"), details: None }
            }
            other => ErrorBody { error: Cow::Owned(other.to_string()), details: None },
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }
}

impl AppError {
    pub fn unauthorized() -> Self {
        AppError::Unauthorized("Unauthorized")
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                // Struct level checks are reported against the whole body.
                let field = if field == "__all__" { "body".to_string() } else { field.to_string() };
                errors.iter().map(move |e| FieldError {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", e.code)),
                })
            })
            .collect();

        details.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(details)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return AppError::NotFound("Record not found".into());
        }

        let code = err.as_database_error().and_then(|e| e.code()).map(Cow::into_owned);
        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => AppError::Conflict("Record already exists".into()),
            Some(FOREIGN_KEY_VIOLATION) => AppError::Conflict("Owning user does not exist".into()),
            Some(CHECK_VIOLATION) => AppError::BadRequest("Value out of allowed range".into()),
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => AppError::unauthorized(),
            AuthError::InvalidCredentials => AppError::Unauthorized("Invalid credentials"),
            AuthError::InvalidToken | AuthError::ExpiredToken | AuthError::InvalidSubject => {
                AppError::Forbidden
            }
            AuthError::TokenCreation | AuthError::MissingState | AuthError::Password(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Session and credential failures.
#[derive(Debug, Clone, Display)]
pub enum AuthError {
    #[display("No session token")]
    MissingToken,

    #[display("Invalid session token")]
    InvalidToken,

    #[display("Session token expired")]
    ExpiredToken,

    #[display("Session token has a malformed subject")]
    InvalidSubject,

    #[display("Invalid credentials")]
    InvalidCredentials,

    #[display("Failed to sign session token")]
    TokenCreation,

    #[display("Application state is not configured")]
    MissingState,

    #[display("Password error: {_0}")]
    Password(String),
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        AppError::from(self.clone()).status_code()
    }

    fn error_response(&self) -> HttpResponse {
        AppError::from(self.clone()).error_response()
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Password(err.to_string())
    }
}

// A malformed login body is indistinguishable from bad credentials.
impl From<ValidationErrors> for AuthError {
    fn from(_: ValidationErrors) -> Self {
        AuthError::InvalidCredentials
    }
}

#[derive(Debug, Display)]
pub enum PasswordError {
    #[display("Invalid argon2 parameters: {_0}")]
    InvalidParameters(String),

    #[display("Hashing failed: {_0}")]
    HashingError(String),

    #[display("Stored hash is not a PHC string: {_0}")]
    InvalidHashFormat(String),

    #[display("Verification failed: {_0}")]
    VerificationError(String),
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
