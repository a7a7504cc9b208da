use axum::http::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

pub static INVALID_API_KEY_MESSAGE: &str =
    "Invalid API Key. Get API key from: https://modelslab.com/dashboard/api-keys";

#[derive(Debug)]
pub enum ImagesApiError {
    Timeout,
    RequestFailed(String),
    UnexpectedError,
    ApiKeyNotConfigured,
    InvalidApiKey,
    GenerationFailed(Option<String>),
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::Timeout => ApiError {
                code: StatusCode::REQUEST_TIMEOUT,
                message: "Request timeout - image generation took too long".to_string(),
            },
            Self::RequestFailed(cause) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Request failed: {}", cause),
            },
            Self::UnexpectedError => DefaultApiError::UnexpectedError.value(),
            Self::ApiKeyNotConfigured => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "STABLE_DIFFUSION_KEY not configured".to_string(),
            },
            Self::InvalidApiKey => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: INVALID_API_KEY_MESSAGE.to_string(),
            },
            Self::GenerationFailed(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message
                    .clone()
                    .unwrap_or("Image generation failed".to_string()),
            },
        }
    }
}
