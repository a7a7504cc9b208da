use serde::Deserialize;
use serde_json::Value;

/// Only `status` is typed strictly. The rest is read leniently or just logged.
#[derive(Debug, Deserialize)]
pub struct ModelsLabText2ImgResponse {
    pub status: String,
    pub id: Option<Value>,
    pub message: Option<Value>,
    pub output: Option<Value>,
    pub eta: Option<Value>,
    pub fetch_result: Option<Value>,
}

impl ModelsLabText2ImgResponse {
    pub fn first_output(&self) -> Option<&str> {
        self.output.as_ref()?.as_array()?.first()?.as_str()
    }

    /// ModelsLab sends either a plain string or an object of field errors.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null => None,
            Value::String(message) => Some(message.to_string()),
            other => Some(other.to_string()),
        }
    }
}
