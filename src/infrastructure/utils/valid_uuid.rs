use uuid::Uuid;

use crate::errors::AppError;

/// Parses a record id taken from the request path
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::BadRequest(format!("'{}' is not a valid record id", id)))
}
