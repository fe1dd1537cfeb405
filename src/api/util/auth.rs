use crate::config;
use crate::errors::AppError;

/// The single credential check for write/delete routes. A wrong or missing
/// `api_key` is a 403; nothing else in the codebase compares the secret.
pub fn require_api_key(provided: Option<&str>) -> Result<(), AppError> {
    match provided {
        Some(key) if key == config::API_KEY => Ok(()),
        _ => Err(AppError::Forbidden(
            "You are not allowed to make this request. Make sure you have the correct api_key"
                .into(),
        )),
    }
}
