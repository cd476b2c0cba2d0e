use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ConfigError;
use std::path::PathBuf;

/// Runtime settings read once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pages_dir: PathBuf,
    pub styles_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub session_ttl_secs: i64,
    pub default_admin_username: String,
    pub default_admin_password: String,
}

impl Settings {
    fn database_url_spec() -> ConfigSpec {
        ConfigSpec::new("DATABASE_URL").default_value("sqlite://storefront.db?mode=rwc")
    }

    fn host_spec() -> ConfigSpec {
        ConfigSpec::new("HOST").default_value("0.0.0.0")
    }

    fn port_spec() -> ConfigSpec {
        ConfigSpec::new("PORT")
            .default_value("3000")
            .validator(ConfigSpec::validate_port)
    }

    fn pages_dir_spec() -> ConfigSpec {
        ConfigSpec::new("PAGES_DIR").default_value("pages").min_length(1)
    }

    fn styles_dir_spec() -> ConfigSpec {
        ConfigSpec::new("STYLES_DIR").default_value("css").min_length(1)
    }

    fn uploads_dir_spec() -> ConfigSpec {
        ConfigSpec::new("UPLOADS_DIR").default_value("uploads").min_length(1)
    }

    fn session_ttl_spec() -> ConfigSpec {
        ConfigSpec::new("SESSION_TTL_SECS")
            .default_value("7200")
            .validator(ConfigSpec::validate_positive_integer)
    }

    fn admin_username_spec() -> ConfigSpec {
        ConfigSpec::new("DEFAULT_ADMIN_USERNAME")
            .default_value("fouzi")
            .min_length(1)
    }

    fn admin_password_spec() -> ConfigSpec {
        ConfigSpec::new("DEFAULT_ADMIN_PASSWORD")
            .default_value("admin-V1")
            .min_length(1)
    }

    /// Load every setting, failing on the first invalid one
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let port = Self::port_spec().load(env)?;
        let session_ttl = Self::session_ttl_spec().load(env)?;

        Ok(Self {
            database_url: Self::database_url_spec().load(env)?,
            host: Self::host_spec().load(env)?,
            port: parse_number("PORT", &port)?,
            pages_dir: PathBuf::from(Self::pages_dir_spec().load(env)?),
            styles_dir: PathBuf::from(Self::styles_dir_spec().load(env)?),
            uploads_dir: PathBuf::from(Self::uploads_dir_spec().load(env)?),
            session_ttl_secs: parse_number("SESSION_TTL_SECS", &session_ttl)?,
            default_admin_username: Self::admin_username_spec().load(env)?,
            default_admin_password: Self::admin_password_spec().load(env)?,
        })
    }

    /// Address the HTTP listener binds to
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::Invalid {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
