use crate::config::EnvironmentProvider;
use crate::config::errors::ConfigError;

/// Declaration of one environment-backed setting
///
/// Resolution order is environment variable, then default. A setting with
/// neither is missing and fails if `required`, otherwise resolves to `None`.
pub struct ConfigSpec {
    pub env_var: String,
    pub default_value: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_var: &str) -> Self {
        Self {
            env_var: env_var.to_string(),
            default_value: None,
            required: false,
            min_length: None,
            validator: None,
        }
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Resolve the value, or `None` when optional and unset
    pub fn load_optional(
        &self,
        env: &dyn EnvironmentProvider,
    ) -> Result<Option<String>, ConfigError> {
        let value = env
            .get_var(&self.env_var)
            .or_else(|| self.default_value.clone());

        match value {
            Some(value) => {
                self.validate(&value)?;
                Ok(Some(value))
            }
            None if self.required => Err(ConfigError::Missing {
                name: self.env_var.clone(),
            }),
            None => Ok(None),
        }
    }

    /// Resolve the value, failing when nothing provides one
    pub fn load(&self, env: &dyn EnvironmentProvider) -> Result<String, ConfigError> {
        self.load_optional(env)?.ok_or_else(|| ConfigError::Missing {
            name: self.env_var.clone(),
        })
    }

    fn validate(&self, value: &str) -> Result<(), ConfigError> {
        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(ConfigError::TooShort {
                    name: self.env_var.clone(),
                    min,
                    actual: value.len(),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ConfigError::Invalid {
                name: self.env_var.clone(),
                reason,
            })?;
        }

        Ok(())
    }

    /// Validator for TCP ports
    pub fn validate_port(value: &str) -> Result<(), String> {
        match value.parse::<u16>() {
            Ok(0) => Err("port must be between 1 and 65535".to_string()),
            Ok(_) => Ok(()),
            Err(e) => Err(format!("'{}' is not a port number: {}", value, e)),
        }
    }

    /// Validator for strictly positive integers
    pub fn validate_positive_integer(value: &str) -> Result<(), String> {
        match value.parse::<i64>() {
            Ok(n) if n > 0 => Ok(()),
            Ok(n) => Err(format!("must be greater than zero, got {}", n)),
            Err(e) => Err(format!("'{}' is not an integer: {}", value, e)),
        }
    }
}
