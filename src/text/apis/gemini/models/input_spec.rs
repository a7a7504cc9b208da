use serde::Serialize;

use crate::text::apis::gemini::config::{MAX_OUTPUT_TOKENS, TEMPERATURE};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub contents: Vec<InputContent>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct InputContent {
    pub role: String,
    pub parts: Vec<InputPart>,
}

#[derive(Debug, Serialize)]
pub struct InputPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl InputSpec {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![InputContent {
                role: "user".to_string(),
                parts: vec![InputPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}
