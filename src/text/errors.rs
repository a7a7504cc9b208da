use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TextApiError {
    ApiKeyNotConfigured,
    RequestFailed(String),
    UpstreamError(String),
    InvalidResponse,
    NoTextGenerated,
}

impl TextApiError {
    pub fn value(&self) -> ApiError {
        let message = match self {
            Self::ApiKeyNotConfigured => "GEMINI_API_KEY not configured".to_string(),
            Self::RequestFailed(cause) => format!("Text generation request failed: {}", cause),
            Self::UpstreamError(message) => format!("Text generation failed: {}", message),
            Self::InvalidResponse => "Text generation returned an unreadable response".to_string(),
            Self::NoTextGenerated => "No text generated from API response".to_string(),
        };

        ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}
