use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::config::OAuthConfig;

/// Public OAuth client settings for the front end
///
/// The client secret never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OAuthClientDto {
    pub client_id: String,
    pub redirect_uri: String,
    /// False while placeholder credentials are in use
    pub configured: bool,
}

impl From<&OAuthConfig> for OAuthClientDto {
    fn from(config: &OAuthConfig) -> Self {
        Self {
            client_id: config.client_id.clone(),
            redirect_uri: config.redirect_uri.clone(),
            configured: config.is_configured(),
        }
    }
}
