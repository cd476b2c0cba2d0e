use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Error envelope returned by every JSON endpoint
#[derive(Object, Debug, Clone)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Acknowledgement for updates, deletes and logout
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
