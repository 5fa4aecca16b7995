use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    entities::skill::NewSkill,
    errors::AppError,
    use_cases::extractors::AuthClaims,
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[get("")]
pub async fn list_skills(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let skills = state.skill_handler.list_skills(&user_id).await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[post("")]
pub async fn add_skill(
    state: web::Data<AppState>,
    claims: AuthClaims,
    body: web::Json<NewSkill>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let skill = state.skill_handler.add_skill(user_id, body.into_inner()).await?;

    Ok(HttpResponse::Created().json(skill))
}

#[delete("/{id}")]
pub async fn delete_skill(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let id = valid_uuid(&id)?;
    state.skill_handler.delete_skill(&id, &user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}
