use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError,
    models::generate_image_response::GenerateImageResponse, service,
};

pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    let Some((api_key, api_url)) = state.envy.modelslab_credentials()
    else {
        tracing::error!("generate_image failed: STABLE_DIFFUSION_KEY not configured");
        return Err(ImagesApiError::ApiKeyNotConfigured.value());
    };

    match dto.validate() {
        Ok(_) => match service::generate_image(&dto, api_key, api_url, &state).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
