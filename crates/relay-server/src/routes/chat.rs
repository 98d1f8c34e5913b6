use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use relay::adapter;
use relay::backends::resolver::BackendTarget;
use relay::backends::{factory, resolver};
use relay::errors::BackendError;
use serde_json::Value;

use crate::state::AppState;

/// Failure text shown to the browser when the backend cannot be reached or
/// is not configured. The backend's own reply is never rewritten; this text
/// only ever replaces a reply that does not exist.
fn diagnostic(err: &BackendError) -> String {
    format!(
        "Chat backend error: {err}\n\n\
         For local development:\n\
         1. Start the chat backend on {}\n\
         2. Retry once it is reachable\n\n\
         Or point RELAY_BACKEND__URL at a running backend.",
        resolver::LOCAL_BACKEND_URL
    )
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let messages = adapter::normalize(&body);

    let reply = async {
        let target = resolver::resolve(&state.backend)?;
        match &target {
            BackendTarget::Bridge { url } => {
                tracing::info!("forwarding {} messages to {}", messages.len(), url)
            }
            BackendTarget::OpenAi(config) => tracing::info!(
                "forwarding {} messages to completion model {}",
                messages.len(),
                config.model
            ),
        }
        factory::get_backend(target)?.forward(&messages).await
    }
    .await;

    let (status, text) = match reply {
        Ok(reply) => (
            StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY),
            reply.text,
        ),
        Err(err) => {
            tracing::error!("chat backend request failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, diagnostic(&err))
        }
    };

    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .with_state(state)
}
