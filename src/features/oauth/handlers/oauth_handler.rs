use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::config::OAuthConfig;
use crate::features::oauth::dtos::OAuthClientDto;
use crate::shared::types::ApiResponse;

/// Get the OAuth client settings
#[utoipa::path(
    get,
    path = "/api/auth/oauth",
    tag = "auth",
    responses(
        (status = 200, description = "OAuth client settings", body = ApiResponse<OAuthClientDto>)
    )
)]
pub async fn get_oauth_client(
    State(config): State<Arc<OAuthConfig>>,
) -> Json<ApiResponse<OAuthClientDto>> {
    Json(ApiResponse::success(
        Some(OAuthClientDto::from(config.as_ref())),
        None,
    ))
}
