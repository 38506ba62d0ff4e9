#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Cannot connect to device: {0}")]
    CannotConnect(String),

    #[error("Device unreachable: {0}")]
    DeviceUnreachable(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Device already configured: {0}")]
    AlreadyConfigured(String),

    #[error("Device API error: {message}")]
    Api { message: String, status: Option<u16> },

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CannotConnect(_) | AppError::DeviceUnreachable(_) => 4,
            AppError::EntryNotFound(_) => 3,
            AppError::AlreadyConfigured(_) | AppError::InvalidInput(_) => 2,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::CannotConnect(_) => "cannot_connect",
            AppError::DeviceUnreachable(_) => "device_unreachable",
            AppError::Unknown(_) => "unknown",
            AppError::EntryNotFound(_) => "entry_not_found",
            AppError::AlreadyConfigured(_) => "already_configured",
            AppError::Api { .. } => "api",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let AppError::Api {
            status: Some(status),
            ..
        } = self
        {
            obj["status"] = serde_json::json!(status);
        }
        obj
    }

    /// Wrap a device-side failure raised while the light is running.
    pub fn unreachable(err: AppError) -> Self {
        match err {
            AppError::DeviceUnreachable(_) => err,
            other => AppError::DeviceUnreachable(other.to_string()),
        }
    }
}
