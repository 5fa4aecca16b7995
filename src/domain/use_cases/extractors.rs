use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::{entities::token::Claims, errors::AppError};

/// The verified caller, taken from the claims `AuthMiddleware` stored on
/// the request. Fails with 401 outside the guarded routes and with 403 when
/// the token subject is not a user id.
#[derive(Debug, Clone)]
pub struct AuthClaims {
    pub user_id: Uuid,
    pub claims: Claims,
}

impl FromRequest for AuthClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let extracted = match req.extensions().get::<Claims>() {
            Some(claims) => claims
                .user_id()
                .map(|user_id| AuthClaims { user_id, claims: claims.clone() })
                .map_err(AppError::from),
            None => Err(AppError::unauthorized()),
        };
        ready(extracted)
    }
}
