use url::Url;

use super::configs::{BackendConfig, OpenAiBackendConfig};
use crate::errors::{BackendError, BackendResult};

/// Where the local dev backend listens. Earlier revisions of this system
/// disagreed on the port and path; this pair is canonical now and the only
/// one supported. Override with an explicit backend URL if yours differs.
pub const LOCAL_BACKEND_URL: &str = "http://127.0.0.1:8080/api/chat";

/// Path the platform routes to the backend within the same deployment.
pub const PLATFORM_BACKEND_PATH: &str = "/api/chat";

/// A resolved upstream target.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendTarget {
    /// An intermediate chat backend speaking `{"messages": [...]}`.
    Bridge { url: String },
    /// The completion API itself, no intermediary.
    OpenAi(OpenAiBackendConfig),
}

/// Pick the upstream for this deployment environment.
///
/// Decision order: explicit URL override, then the managed platform (direct
/// completion API or platform-routed backend depending on policy), then the
/// local dev default. Deterministic per config; nothing about the request
/// participates.
pub fn resolve(config: &BackendConfig) -> BackendResult<BackendTarget> {
    if let Some(url) = nonempty(config.url.as_deref()) {
        Url::parse(url)
            .map_err(|e| BackendError::Misconfigured(format!("invalid backend URL: {e}")))?;
        return Ok(BackendTarget::Bridge {
            url: url.to_string(),
        });
    }

    if config.platform {
        if config.direct {
            let api_key = nonempty(config.api_key.as_deref()).ok_or_else(|| {
                BackendError::Misconfigured("completion API key not set".to_string())
            })?;
            return Ok(BackendTarget::OpenAi(OpenAiBackendConfig {
                host: config.completion_host.clone(),
                api_key: api_key.to_string(),
                model: config.model.clone(),
            }));
        }

        let host = nonempty(config.platform_host.as_deref()).ok_or_else(|| {
            BackendError::Misconfigured("platform host not set".to_string())
        })?;
        return Ok(BackendTarget::Bridge {
            url: format!("https://{}{}", host.trim_end_matches('/'), PLATFORM_BACKEND_PATH),
        });
    }

    Ok(BackendTarget::Bridge {
        url: LOCAL_BACKEND_URL.to_string(),
    })
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
