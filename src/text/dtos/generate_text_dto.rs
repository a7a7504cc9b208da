use serde::Deserialize;
use validator::Validate;

pub static WORD_LIMIT_INSTRUCTION: &str = "\n\nanswer in 50 words max";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateTextDto {
    #[validate(length(min = 1, message = "prompt must not be empty."))]
    pub prompt: String,
}

impl GenerateTextDto {
    pub fn prompt_with_instruction(&self) -> String {
        [self.prompt.as_str(), WORD_LIMIT_INSTRUCTION].concat()
    }
}
