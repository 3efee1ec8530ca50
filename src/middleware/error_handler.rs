use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    web, Error, HttpRequest,
};

use crate::core::AppError;

/// Routes JSON body rejections through the application error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected JSON body");
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Routes query string rejections (bad quick range, malformed flags) the same way
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected query string");
    AppError::validation(format!("Invalid query string: {}", err)).into()
}

/// Extractor configs wired to the handlers above
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
