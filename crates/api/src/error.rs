use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use reminder_app_api_structs::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Internal server error. Error message: `{0}`")]
    InternalError(String),
    #[error("Invalid data provided. Error message: `{0}`")]
    BadClientData(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl AppError {
    /// The raw message that is returned to the client
    pub fn message(&self) -> &str {
        match self {
            Self::InternalError(msg) | Self::BadClientData(msg) | Self::NotFound(msg) => msg,
        }
    }
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

/// Malformed json bodies and fields of the wrong type are bad client data
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadClientData(err.to_string()).into()
}
