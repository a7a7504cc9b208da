use reqwest::{Response, StatusCode};

use crate::{
    images::{
        dtos::generate_image_dto::GenerateImageDto,
        enums::modelslab_status::ModelsLabStatus, errors::ImagesApiError,
        models::generate_image_response::GenerateImageResponse,
    },
    AppState,
};

use super::{
    config::WEBHOOK_PATH, models::input_spec::InputSpec,
    structs::modelslab_text2img_response::ModelsLabText2ImgResponse,
};

pub async fn text2img(
    dto: &GenerateImageDto,
    api_key: &str,
    api_url: &str,
    state: &AppState,
) -> Result<GenerateImageResponse, ImagesApiError> {
    let input_spec = provide_input_spec(dto, api_key, &state.envy.webhook_base_url);

    let result = state
        .client
        .post(api_url)
        .timeout(state.image_request_timeout)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => parse_response_to_generate_image_response(res).await,
        Err(e) => Err(map_request_error(e)),
    }
}

fn provide_input_spec(dto: &GenerateImageDto, api_key: &str, webhook_base_url: &str) -> InputSpec {
    let webhook = match &dto.webhook {
        Some(webhook) => webhook.to_string(),
        None => [webhook_base_url.trim_end_matches('/'), WEBHOOK_PATH].concat(),
    };

    InputSpec {
        key: api_key.to_string(),
        prompt: dto.prompt.to_string(),
        negative_prompt: dto.negative_prompt().to_string(),
        width: dto.width().to_string(),
        height: dto.height().to_string(),
        samples: dto.samples(),
        safety_checker: dto.safety_checker(),
        seed: dto.seed,
        base64: dto.base64(),
        enhance_prompt: dto.enhance_prompt(),
        instant_response: false,
        track_id: dto.track_id.clone(),
        webhook,
    }
}

fn map_request_error(e: reqwest::Error) -> ImagesApiError {
    tracing::error!(%e);

    match e.is_timeout() {
        true => ImagesApiError::Timeout,
        false => ImagesApiError::RequestFailed(e.to_string()),
    }
}

async fn parse_response_to_generate_image_response(
    res: Response,
) -> Result<GenerateImageResponse, ImagesApiError> {
    let status = res.status();

    match res.text().await {
        Ok(text) => interpret_response(status, &text),
        Err(e) => Err(map_request_error(e)),
    }
}

fn interpret_response(
    http_status: StatusCode,
    text: &str,
) -> Result<GenerateImageResponse, ImagesApiError> {
    if http_status == StatusCode::UNAUTHORIZED {
        tracing::error!(%text, "modelslab rejected the api key");
        return Err(ImagesApiError::InvalidApiKey);
    }

    let Ok(response) = serde_json::from_str::<ModelsLabText2ImgResponse>(text)
    else {
        tracing::error!(%http_status, %text, "unreadable modelslab response");
        return Err(ImagesApiError::UnexpectedError);
    };

    let Some(status) = ModelsLabStatus::from_value(&response.status)
    else {
        tracing::error!(status = %response.status, "unknown modelslab status");
        return Err(ImagesApiError::UnexpectedError);
    };

    if status == ModelsLabStatus::Error {
        let message = response.message_text();
        tracing::error!(?message, "modelslab reported an error");

        return match message {
            Some(message) if is_invalid_api_key(&message) => Err(ImagesApiError::InvalidApiKey),
            message => Err(ImagesApiError::GenerationFailed(message)),
        };
    }

    if status != ModelsLabStatus::Success && status != ModelsLabStatus::Completed {
        tracing::info!(
            status = status.value(),
            id = ?response.id,
            eta = ?response.eta,
            fetch_result = ?response.fetch_result,
            "image generation not finished"
        );
    }

    Ok(GenerateImageResponse::from_status(
        status,
        response.first_output(),
    ))
}

fn is_invalid_api_key(message: &str) -> bool {
    message.to_lowercase().contains("invalid api key")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dto(prompt: &str) -> GenerateImageDto {
        GenerateImageDto {
            prompt: prompt.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn input_spec_applies_defaults() {
        let input_spec = provide_input_spec(&dto("a fox"), "sd-key", "http://localhost:3000/");
        let value = serde_json::to_value(input_spec).unwrap();

        assert_eq!(
            value,
            json!({
                "key": "sd-key",
                "prompt": "a fox",
                "negative_prompt": "bad quality, blurry, distorted",
                "width": "512",
                "height": "512",
                "samples": 1,
                "safety_checker": true,
                "seed": null,
                "base64": false,
                "enhance_prompt": false,
                "instant_response": false,
                "track_id": null,
                "webhook": "http://localhost:3000/campaigns/webhook"
            })
        );
    }

    #[test]
    fn input_spec_keeps_caller_webhook_and_track_id() {
        let dto = GenerateImageDto {
            prompt: "a fox".to_string(),
            seed: Some(42),
            track_id: Some("campaign-7".to_string()),
            webhook: Some("https://hooks.example.com/done".to_string()),
            ..Default::default()
        };
        let input_spec = provide_input_spec(&dto, "sd-key", "http://localhost:3000");

        assert_eq!(input_spec.webhook, "https://hooks.example.com/done");
        assert_eq!(input_spec.track_id.as_deref(), Some("campaign-7"));
        assert_eq!(input_spec.seed, Some(42));
    }

    #[test]
    fn success_takes_first_output() {
        let body = json!({
            "status": "success",
            "id": 12,
            "output": ["https://cdn.example.com/0.png", "https://cdn.example.com/1.png"]
        })
        .to_string();

        let response = interpret_response(StatusCode::OK, &body).unwrap();

        assert!(response.success);
        assert_eq!(response.image_url.as_deref(), Some("https://cdn.example.com/0.png"));
        assert_eq!(response.error, None);
    }

    #[test]
    fn completed_without_output_has_no_url() {
        let body = json!({ "status": "completed", "output": [] }).to_string();
        let response = interpret_response(StatusCode::OK, &body).unwrap();

        assert!(response.success);
        assert_eq!(response.image_url, None);
    }

    #[test]
    fn processing_is_reported_not_awaited() {
        let body = json!({
            "status": "processing",
            "eta": 12.5,
            "fetch_result": "https://modelslab.com/api/v6/fetch/12",
            "future_links": ["https://cdn.example.com/0.png"],
            "output": []
        })
        .to_string();

        let response = interpret_response(StatusCode::OK, &body).unwrap();

        assert!(!response.success);
        assert_eq!(response.image_url, None);
        assert_eq!(response.error.as_deref(), Some("Image generation is still processing"));
    }

    #[test]
    fn error_status_carries_upstream_message() {
        let body = json!({ "status": "error", "message": "Out of credits" }).to_string();

        match interpret_response(StatusCode::OK, &body) {
            Err(ImagesApiError::GenerationFailed(Some(message))) => {
                assert_eq!(message, "Out of credits")
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn error_status_with_field_errors_is_stringified() {
        let body = json!({ "status": "error", "message": { "prompt": ["required"] } }).to_string();

        match interpret_response(StatusCode::OK, &body) {
            Err(ImagesApiError::GenerationFailed(Some(message))) => {
                assert!(message.contains("prompt"))
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_key_is_recognized() {
        let body = json!({
            "status": "error",
            "message": "Invalid Api Key"
        })
        .to_string();

        assert!(matches!(
            interpret_response(StatusCode::OK, &body),
            Err(ImagesApiError::InvalidApiKey)
        ));
        assert!(matches!(
            interpret_response(StatusCode::UNAUTHORIZED, ""),
            Err(ImagesApiError::InvalidApiKey)
        ));
    }

    #[test]
    fn loosely_typed_extra_fields_keep_table_result() {
        let body = json!({ "status": "processing", "eta": "12", "output": [] }).to_string();
        let response = interpret_response(StatusCode::OK, &body).unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Image generation is still processing"));

        let body = json!({ "status": "success", "output": ["u"], "fetch_result": 12 }).to_string();
        let response = interpret_response(StatusCode::OK, &body).unwrap();

        assert!(response.success);
        assert_eq!(response.image_url.as_deref(), Some("u"));
    }

    #[test]
    fn non_array_output_has_no_url() {
        let body = json!({ "status": "success", "output": "https://cdn.example.com/0.png" }).to_string();
        let response = interpret_response(StatusCode::OK, &body).unwrap();

        assert!(response.success);
        assert_eq!(response.image_url, None);
    }

    #[test]
    fn unreadable_or_unknown_status_is_unexpected() {
        assert!(matches!(
            interpret_response(StatusCode::OK, "<html>busy</html>"),
            Err(ImagesApiError::UnexpectedError)
        ));
        assert!(matches!(
            interpret_response(StatusCode::OK, r#"{"output":[]}"#),
            Err(ImagesApiError::UnexpectedError)
        ));
        assert!(matches!(
            interpret_response(StatusCode::OK, r#"{"status":"queued"}"#),
            Err(ImagesApiError::UnexpectedError)
        ));
    }
}
