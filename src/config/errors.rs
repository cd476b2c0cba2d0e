use thiserror::Error;

/// Startup configuration failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required setting '{name}' is missing")]
    Missing { name: String },

    #[error("Setting '{name}' must be at least {min} characters, got {actual}")]
    TooShort {
        name: String,
        min: usize,
        actual: usize,
    },

    #[error("Invalid setting '{name}': {reason}")]
    Invalid { name: String, reason: String },
}
