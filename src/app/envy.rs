use serde::Deserialize;

pub static DEFAULT_WEBHOOK_BASE_URL: &str = "http://localhost:3000";
pub static DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub stable_diffusion_key: Option<String>,
    pub modelslab_api_url: Option<String>,
    #[serde(default = "default_webhook_base_url")]
    pub webhook_base_url: String,

    pub gemini_api_key: Option<String>,
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,
}

impl Envy {
    pub fn gemini_api_key(&self) -> Option<&str> {
        non_empty(&self.gemini_api_key)
    }

    /// Returns the ModelsLab key and endpoint, or `None` unless both are set.
    pub fn modelslab_credentials(&self) -> Option<(&str, &str)> {
        let api_key = non_empty(&self.stable_diffusion_key)?;
        let api_url = non_empty(&self.modelslab_api_url)?;

        Some((api_key, api_url))
    }
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            stable_diffusion_key: None,
            modelslab_api_url: None,
            webhook_base_url: default_webhook_base_url(),
            gemini_api_key: None,
            gemini_api_url: default_gemini_api_url(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_webhook_base_url() -> String {
    DEFAULT_WEBHOOK_BASE_URL.to_string()
}

fn default_gemini_api_url() -> String {
    DEFAULT_GEMINI_API_URL.to_string()
}
