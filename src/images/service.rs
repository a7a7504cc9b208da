use crate::{app::models::api_error::ApiError, app::util::prompt, AppState};

use super::{
    apis::modelslab, dtos::generate_image_dto::GenerateImageDto,
    models::generate_image_response::GenerateImageResponse,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    api_key: &str,
    api_url: &str,
    state: &AppState,
) -> Result<GenerateImageResponse, ApiError> {
    tracing::info!("generating image for prompt: {}", prompt::preview(&dto.prompt));

    match modelslab::service::text2img(dto, api_key, api_url, state).await {
        Ok(response) => {
            tracing::info!(
                success = response.success,
                has_image = response.image_url.is_some(),
                "image generation returned"
            );
            Ok(response)
        }
        Err(e) => {
            tracing::error!("generate_image failed: {:?}", e);
            Err(e.value())
        }
    }
}
