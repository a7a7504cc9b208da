use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTextResponse {
    pub success: bool,
    pub text: String,
    pub error: Option<String>,
}

impl GenerateTextResponse {
    pub fn from_text(text: String) -> Self {
        Self {
            success: true,
            text,
            error: None,
        }
    }
}
