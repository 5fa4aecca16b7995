use actix_web::{get, post, web, HttpResponse};

use crate::{
    entities::user::{LoginUser, NewUser},
    errors::AppError,
    use_cases::extractors::AuthClaims,
    AppState,
};

/// Creates the account and signs the new user in.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
    let session = state.auth_handler.register(body.into_inner()).await?;

    Ok(HttpResponse::Created()
        .cookie(state.session_cookie.issue(session.token))
        .json(session.user))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginUser>,
) -> Result<HttpResponse, AppError> {
    let session = state.auth_handler.login(body.into_inner()).await.map_err(|e| {
        tracing::info!("Login rejected: {}", e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok()
        .cookie(state.session_cookie.issue(session.token))
        .json(session.user))
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(state.session_cookie.clear())
        .json(serde_json::json!({"message": "Logged out"}))
}

#[get("/me")]
pub async fn me(state: web::Data<AppState>, claims: AuthClaims) -> HttpResponse {
    HttpResponse::Ok().json(state.auth_handler.current_user(claims.claims))
}
