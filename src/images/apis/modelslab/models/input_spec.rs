use serde::Serialize;

/// Body of a ModelsLab text2img call. Width and height travel as strings.
#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub key: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub width: String,
    pub height: String,
    pub samples: u32,
    pub safety_checker: bool,
    pub seed: Option<i64>,
    pub base64: bool,
    pub enhance_prompt: bool,
    pub instant_response: bool,
    pub track_id: Option<String>,
    pub webhook: String,
}
