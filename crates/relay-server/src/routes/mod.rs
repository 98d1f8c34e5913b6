// Export route modules
pub mod chat;
pub mod login;

use crate::auth;
use crate::state::AppState;
use axum::{middleware, Router};

// Function to configure all routes behind the session gate
pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(chat::routes(state.clone()))
        .merge(login::routes(state))
        .layer(middleware::from_fn(auth::session_gate))
}
