use axum::http::{header, HeaderMap};
use tracing::error;

use crate::error::{AppError, AppResult};

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Rejects the request with 415 unless its declared media type is `expected`.
/// Parameters such as `; charset=utf-8` are ignored.
pub fn check_content_type(headers: &HeaderMap, expected: &str) -> AppResult<()> {
    let rejection = || AppError::UnsupportedMediaType(format!("Content-Type must be {expected}"));

    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        error!("No Content-Type specified");
        return Err(rejection());
    };

    let declared = value.to_str().unwrap_or_default();
    let media_type = declared.split(';').next().unwrap_or_default().trim();
    if media_type.eq_ignore_ascii_case(expected) {
        return Ok(());
    }

    error!(content_type = %declared, "Invalid Content-Type");
    Err(rejection())
}
