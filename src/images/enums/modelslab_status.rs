#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelsLabStatus {
    Success,
    Processing,
    Error,
    Pending,
    Completed,
    Failed,
}

/// Response shape a status maps to. The image url is filled in separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTemplate {
    pub success: bool,
    pub error: Option<&'static str>,
}

impl ModelsLabStatus {
    pub const ALL: [ModelsLabStatus; 6] = [
        Self::Success,
        Self::Processing,
        Self::Error,
        Self::Pending,
        Self::Completed,
        Self::Failed,
    ];

    pub fn value(&self) -> &str {
        match *self {
            Self::Success => "success",
            Self::Processing => "processing",
            Self::Error => "error",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.value() == value)
    }

    pub fn template(&self) -> StatusTemplate {
        match *self {
            Self::Success | Self::Completed => StatusTemplate {
                success: true,
                error: None,
            },
            Self::Processing => StatusTemplate {
                success: false,
                error: Some("Image generation is still processing"),
            },
            Self::Pending => StatusTemplate {
                success: false,
                error: Some("Image generation pending"),
            },
            Self::Error | Self::Failed => StatusTemplate {
                success: false,
                error: Some("Image generation failed"),
            },
        }
    }

    pub fn returns_image(&self) -> bool {
        matches!(*self, Self::Success | Self::Completed)
    }
}
