/// Deployment-wide backend selection knobs.
///
/// Built once at process start from the environment and never mutated; the
/// resolver is a pure function of this struct.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    /// Explicit upstream URL. When set it wins over everything else.
    pub url: Option<String>,
    /// Running under the managed platform rather than on a dev machine.
    pub platform: bool,
    /// Host the platform routes back into this deployment.
    pub platform_host: Option<String>,
    /// On the platform, skip the intermediate backend and call the
    /// completion API directly.
    pub direct: bool,
    pub api_key: Option<String>,
    pub completion_host: String,
    pub model: String,
}

/// Connection details for the direct completion API target.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiBackendConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
}
