use reqwest::{Response, StatusCode};

use crate::{app::models::api_error::ApiError, text::errors::TextApiError, AppState};

use super::{
    config::MODEL,
    models::input_spec::InputSpec,
    structs::gemini_generate_content_response::{
        GeminiErrorResponse, GeminiGenerateContentResponse,
    },
};

pub async fn generate_content(
    prompt: &str,
    gemini_api_key: &str,
    state: &AppState,
) -> Result<String, ApiError> {
    let input_spec = InputSpec::from_prompt(prompt);
    let url = format!(
        "{}/models/{}:generateContent",
        state.envy.gemini_api_url.trim_end_matches('/'),
        MODEL
    );

    let result = state
        .client
        .post(url)
        .header("x-goog-api-key", gemini_api_key)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => parse_response_to_text(res).await,
        Err(e) => {
            tracing::error!(%e);
            Err(TextApiError::RequestFailed(e.to_string()).value())
        }
    }
}

async fn parse_response_to_text(res: Response) -> Result<String, ApiError> {
    let status = res.status();

    match res.text().await {
        Ok(text) => interpret_response(status, &text).map_err(|e| e.value()),
        Err(e) => {
            tracing::error!(%e);
            Err(TextApiError::RequestFailed(e.to_string()).value())
        }
    }
}

fn interpret_response(status: StatusCode, text: &str) -> Result<String, TextApiError> {
    if !status.is_success() {
        tracing::error!(%status, %text, "gemini returned an error");

        let message = match serde_json::from_str::<GeminiErrorResponse>(text) {
            Ok(error_response) => error_response.error.describe(),
            Err(_) => status.to_string(),
        };

        return Err(TextApiError::UpstreamError(message));
    }

    let Ok(response) = serde_json::from_str::<GeminiGenerateContentResponse>(text)
    else {
        tracing::error!(%text);
        return Err(TextApiError::InvalidResponse);
    };

    match response.text() {
        Some(text) => Ok(text),
        None => {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason.as_deref());
            tracing::error!(?finish_reason, "gemini returned no text");
            Err(TextApiError::NoTextGenerated)
        }
    }
}
