use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {env_var}")]
    MissingEnvVar { env_var: String },

    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

/// Map a settings field path like `backend.api_key` to the environment
/// variable that sets it.
pub fn to_env_var(field: &str) -> String {
    format!("RELAY_{}", field.replace('.', "__").to_uppercase())
}
