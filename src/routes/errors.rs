use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;

/// JSON error response for payload and query-string errors
#[derive(Debug)]
pub struct JsonError(ErrorResponse);

impl JsonError {
    pub fn new(error: &str, message: String, status_code: u16) -> Self {
        Self(ErrorResponse {
            error: error.to_string(),
            message,
            status_code,
        })
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError::new("invalid_json", format!("Invalid JSON: {}", err), 400).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError::new("invalid_query", format!("Invalid query: {}", err), 400).into()
}
