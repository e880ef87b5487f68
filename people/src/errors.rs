use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Failure to retrieve a page of a feed (tweets, news feed entries).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("feed unavailable: {0}")]
    Unavailable(String),
    #[error("feed timed out after {0}ms")]
    Timeout(u64),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] tribes_config::ConfigError),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ServiceError::Io(_) => "IO Error",
            ServiceError::InvalidData(_) => "Invalid Data",
            ServiceError::Config(_) => "Configuration Error",
            ServiceError::Internal(_) => "Internal Server Error",
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": error,
            "message": self.to_string()
        }))
    }
}
