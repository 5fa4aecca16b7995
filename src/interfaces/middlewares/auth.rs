use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::AUTHORIZATION, Method},
    web, Error, HttpMessage, ResponseError,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{auth::cookie::SESSION_COOKIE, errors::{AppError, AuthError}, AppState};

/// Requires a valid session on every `/api` route except the sign in,
/// sign up and sign out endpoints. Verified claims are stored in the
/// request extensions for the `AuthClaims` extractor.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService { service: Rc::new(service) })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !requires_session(req.method(), req.path()) {
                return service.call(req).await;
            }

            let state = req.app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in auth middleware");
                    AuthError::MissingState
                })?;

            let Some(token) = session_token(&req) else {
                tracing::debug!(path = %req.path(), "Request without session token");
                return Ok(reject(req, AppError::unauthorized()));
            };

            match state.auth_handler.verify_token(&token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    service.call(req).await
                }
                Err(e) => {
                    tracing::warn!(path = %req.path(), "Rejected session token: {}", e);
                    Ok(reject(req, AppError::Forbidden))
                }
            }
        })
    }
}

const PUBLIC_API_ROUTES: [&str; 3] = ["/api/auth/register", "/api/auth/login", "/api/auth/logout"];

fn requires_session(method: &Method, path: &str) -> bool {
    if method == Method::OPTIONS || !path.starts_with("/api") {
        return false;
    }
    !(method == Method::POST && PUBLIC_API_ROUTES.contains(&path))
}

/// The `token` cookie, falling back to `Authorization: Bearer <token>`.
fn session_token(req: &ServiceRequest) -> Option<String> {
    let from_cookie = req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|value| !value.is_empty());

    from_cookie.or_else(|| {
        let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();
        (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
    })
}

fn reject(req: ServiceRequest, error: AppError) -> ServiceResponse<BoxBody> {
    req.into_response(error.error_response())
}
