use crate::server::error::config::ConfigError;

/// Default socket address the HTTP server binds to
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
}

impl Config {
    /// Read configuration from environment variables
    ///
    /// `DATABASE_URL` and `VALKEY_URL` are required, `BIND_ADDRESS` is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address: optional_var("BIND_ADDRESS")?
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name)?.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
