use crate::{app::models::api_error::ApiError, app::util::prompt, AppState};

use super::{
    apis::gemini, dtos::generate_text_dto::GenerateTextDto, errors::TextApiError,
    models::generate_text_response::GenerateTextResponse,
};

pub async fn generate_text(
    dto: &GenerateTextDto,
    state: &AppState,
) -> Result<GenerateTextResponse, ApiError> {
    let Some(gemini_api_key) = state.envy.gemini_api_key()
    else {
        tracing::error!("generate_text failed: GEMINI_API_KEY not configured");
        return Err(TextApiError::ApiKeyNotConfigured.value());
    };

    tracing::info!("generating text for prompt: {}", prompt::preview(&dto.prompt));

    let text = gemini::service::generate_content(
        &dto.prompt_with_instruction(),
        gemini_api_key,
        state,
    )
    .await?;

    tracing::info!("text generation completed");

    Ok(GenerateTextResponse::from_text(text))
}
