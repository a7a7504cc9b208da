use serde::{Deserialize, Serialize};

use crate::images::enums::modelslab_status::ModelsLabStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub success: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub error: Option<String>,
}

impl GenerateImageResponse {
    pub fn from_status(status: ModelsLabStatus, first_output: Option<&str>) -> Self {
        let template = status.template();
        let image_url = match status.returns_image() {
            true => first_output.map(str::to_string),
            false => None,
        };

        Self {
            success: template.success,
            image_url,
            error: template.error.map(str::to_string),
        }
    }
}
