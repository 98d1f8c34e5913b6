use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth;
use crate::state::AppState;

async fn login_handler(State(state): State<AppState>, body: String) -> impl IntoResponse {
    // A missing or malformed body counts as an empty submission, not an
    // error; the configuration check must still run first
    let body: Value = serde_json::from_str(&body).unwrap_or_default();
    let submitted = body
        .get("password")
        .and_then(Value::as_str)
        .unwrap_or_default();

    // An unset or empty secret must never accept anything
    let Some(expected) = state.auth.password.as_deref().filter(|p| !p.is_empty()) else {
        tracing::error!("login attempted but no login password is configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Server not configured"})),
        )
            .into_response();
    };

    if submitted != expected {
        tracing::warn!("login rejected: wrong password");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Unauthorized"})),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            auth::session_cookie(state.auth.secure_cookies),
        )],
        Json(json!({"ok": true})),
    )
        .into_response()
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(login_handler))
        .with_state(state)
}
