use relay::backends::configs::BackendConfig;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub password: Option<String>,
    pub secure_cookies: bool,
}

/// Shared application state, built once in `main` and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: BackendConfig,
    pub auth: AuthConfig,
}
