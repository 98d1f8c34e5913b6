use crate::error::{to_env_var, ConfigError};
use config::{Config, Environment};
use relay::backends::configs::BackendConfig;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Default, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Failed to parse socket address")
    }
}

/// Dev/production toggle. Production marks the session cookie `Secure`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    #[default]
    Dev,
    Production,
}

impl EnvironmentMode {
    pub fn is_production(self) -> bool {
        self == EnvironmentMode::Production
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthSettings {
    /// Shared login secret. Unset means login fails closed with a 500.
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub platform: bool,
    #[serde(default)]
    pub platform_host: Option<String>,
    #[serde(default)]
    pub direct: bool,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_completion_host")]
    pub completion_host: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        BackendSettings {
            url: None,
            platform: false,
            platform_host: None,
            direct: false,
            api_key: None,
            completion_host: default_completion_host(),
            model: default_model(),
        }
    }
}

impl BackendSettings {
    // Convert to the relay BackendConfig
    pub fn into_config(self) -> BackendConfig {
        BackendConfig {
            url: self.url,
            platform: self.platform,
            platform_host: self.platform_host,
            direct: self.direct,
            api_key: self.api_key,
            completion_host: self.completion_host,
            model: self.model,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub environment: EnvironmentMode,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub backend: BackendSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        // Start with default configuration
        let config = Config::builder()
            // Server defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("environment", "dev")?
            // Backend defaults
            .set_default("backend.completion_host", default_completion_host())?
            .set_default("backend.model", default_model())?
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Try to deserialize the configuration
        let result: Result<Self, config::ConfigError> = config.try_deserialize();

        // Handle missing field errors specially so the message names the
        // exact variable to set
        match result {
            Ok(settings) => Ok(settings),
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);

                let error_str = err.to_string();
                if error_str.starts_with("missing field") {
                    // Extract field name from error message "missing field `x`"
                    let field = error_str
                        .trim_start_matches("missing field `")
                        .trim_end_matches("`");
                    let env_var = to_env_var(field);
                    Err(ConfigError::MissingEnvVar { env_var })
                } else if let config::ConfigError::NotFound(field) = &err {
                    let env_var = to_env_var(field);
                    Err(ConfigError::MissingEnvVar { env_var })
                } else {
                    Err(ConfigError::Other(err))
                }
            }
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_completion_host() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
