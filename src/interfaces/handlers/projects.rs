use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    entities::project::NewProject,
    errors::AppError,
    use_cases::extractors::AuthClaims,
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[get("")]
pub async fn list_projects(
    state: web::Data<AppState>,
    claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let projects = state.project_handler.list_projects(&user_id).await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[post("")]
pub async fn add_project(
    state: web::Data<AppState>,
    claims: AuthClaims,
    body: web::Json<NewProject>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let project = state.project_handler.add_project(user_id, body.into_inner()).await?;

    Ok(HttpResponse::Created().json(project))
}

#[delete("/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    claims: AuthClaims,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = claims.user_id;
    let id = valid_uuid(&id)?;
    state.project_handler.delete_project(&id, &user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}
