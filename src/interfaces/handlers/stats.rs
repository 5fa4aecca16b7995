use actix_web::{get, web, HttpResponse};

use crate::{errors::AppError, use_cases::extractors::AuthClaims, AppState};

/// Readiness score, breakdown and counts for the caller.
#[get("/stats")]
pub async fn stats(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let report = state.readiness_handler.report(&user_id).await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Same as `/stats` plus the status label and improvement suggestions.
#[get("/readiness")]
pub async fn readiness(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let summary = state.readiness_handler.summary(&user_id).await?;

    Ok(HttpResponse::Ok().json(summary))
}
