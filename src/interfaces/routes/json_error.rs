use actix_web::{
    error::{JsonPayloadError, PathError},
    web, Error, HttpResponse, ResponseError,
};
use serde_json::json;

use crate::errors::AppError;

const MAX_JSON_BYTES: usize = 64 * 1024;

/// Body and path extractor failures answer with the same `{"error": ...}`
/// shape as handler errors.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_JSON_BYTES)
            .error_handler(|err, _req| json_rejection(err)),
    );
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err: PathError, _req| AppError::BadRequest(format!("Invalid path: {}", err)).into()),
    );
}

fn json_rejection(err: JsonPayloadError) -> Error {
    let response = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(json!({"error": "Request body is too large"}))
        }
        JsonPayloadError::ContentType => HttpResponse::UnsupportedMediaType()
            .json(json!({"error": "Expected Content-Type: application/json"})),
        _ => AppError::BadRequest(format!("Invalid JSON body: {}", err)).error_response(),
    };
    actix_web::error::InternalError::from_response(err, response).into()
}
