use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ConfigError;
use std::fmt;

/// Holds secrets that must never reach logs or the database
pub struct SecretManager {
    password_pepper: String,
}

impl SecretManager {
    fn pepper_spec() -> ConfigSpec {
        ConfigSpec::new("PASSWORD_PEPPER")
            .required(true)
            .min_length(16)
    }

    /// Load and validate all secrets
    ///
    /// # Errors
    /// Returns `ConfigError` if the pepper is missing or shorter than 16 characters
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        Ok(Self {
            password_pepper: Self::pepper_spec().load(env)?,
        })
    }

    /// Pepper mixed into every Argon2 password hash
    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}
