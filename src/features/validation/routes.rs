use axum::{routing::post, Router};

use crate::features::validation::handlers::validate_request;

/// Create routes for the validation feature
pub fn routes() -> Router {
    Router::new().route("/api/validate/{schema}", post(validate_request))
}
