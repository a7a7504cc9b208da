use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    UnexpectedError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UnexpectedError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Unexpected error occurred".to_string(),
            },
        }
    }
}
