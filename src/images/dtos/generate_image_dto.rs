use serde::Deserialize;
use validator::Validate;

pub static DEFAULT_WIDTH: u32 = 512;
pub static DEFAULT_HEIGHT: u32 = 512;
pub static DEFAULT_SAMPLES: u32 = 1;
pub static DEFAULT_SAFETY_CHECKER: bool = true;
pub static DEFAULT_NEGATIVE_PROMPT: &str = "bad quality, blurry, distorted";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(min = 1, message = "prompt must not be empty."))]
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub samples: Option<u32>,
    pub safety_checker: Option<bool>,
    pub seed: Option<i64>,
    pub base64: Option<bool>,
    pub enhance_prompt: Option<bool>,
    pub track_id: Option<String>,
    pub webhook: Option<String>,
}

impl GenerateImageDto {
    pub fn negative_prompt(&self) -> &str {
        self.negative_prompt
            .as_deref()
            .unwrap_or(DEFAULT_NEGATIVE_PROMPT)
    }

    pub fn width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn samples(&self) -> u32 {
        self.samples.unwrap_or(DEFAULT_SAMPLES)
    }

    pub fn safety_checker(&self) -> bool {
        self.safety_checker.unwrap_or(DEFAULT_SAFETY_CHECKER)
    }

    pub fn base64(&self) -> bool {
        self.base64.unwrap_or(false)
    }

    pub fn enhance_prompt(&self) -> bool {
        self.enhance_prompt.unwrap_or(false)
    }
}
