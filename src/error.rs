use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Rejected before any network call (blank city, missing credentials)
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Transport or status failure talking to the geocoding/weather services
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl AppError {
    pub fn rate_limited() -> Self {
        AppError::RateLimited(
            "Rate limit reached. Please wait a moment before trying again.".to_string(),
        )
    }

    pub fn invalid_credentials() -> Self {
        AppError::Unauthorized(
            "Invalid OMDb API key. Please check the OMDB_API_KEY setting.".to_string(),
        )
    }

    pub fn network() -> Self {
        AppError::Network(
            "Network error. Please check your internet connection and try again.".to_string(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            AppError::Unauthorized(msg) | AppError::Network(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::ExternalApi(_) | AppError::HttpClient(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
