use axum::{routing::get, Router};
use std::sync::Arc;

use crate::core::config::OAuthConfig;
use crate::features::oauth::handlers::get_oauth_client;

/// Create routes for the OAuth feature
pub fn routes(config: Arc<OAuthConfig>) -> Router {
    Router::new()
        .route("/api/auth/oauth", get(get_oauth_client))
        .with_state(config)
}
