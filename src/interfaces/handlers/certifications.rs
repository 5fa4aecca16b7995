use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    entities::certification::NewCertification,
    errors::AppError,
    use_cases::extractors::AuthClaims,
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[get("")]
pub async fn list_certifications(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let certs = state.certification_handler.list_certifications(&user_id).await?;

    Ok(HttpResponse::Ok().json(certs))
}

#[post("")]
pub async fn add_certification(
    state: web::Data<AppState>,
    claims: AuthClaims,
    body: web::Json<NewCertification>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let cert = state.certification_handler.add_certification(user_id, body.into_inner()).await?;

    Ok(HttpResponse::Created().json(cert))
}

#[delete("/{id}")]
pub async fn delete_certification(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let id = valid_uuid(&id)?;
    state.certification_handler.delete_certification(&id, &user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}
